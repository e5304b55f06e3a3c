use std::fmt;

/// The fixed set of images the Flutter app loads from `assets/images`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AppImage {
    /// Main logo, 120x120.
    Logo,
    /// Logo on the login screen, 120x120.
    LoginScreen,
    /// Logo inside buttons, 24x24.
    ButtonIcon,
    /// Large splash-style display, 200x200.
    LargeDisplay,
    /// Small inline icon, 48x48.
    SmallIcon,
}

impl AppImage {
    /// Every app image, in the order they are generated.
    pub const ALL: [AppImage; 5] = [AppImage::Logo,
                                    AppImage::LoginScreen,
                                    AppImage::ButtonIcon,
                                    AppImage::LargeDisplay,
                                    AppImage::SmallIcon];

    /// Returns the file name of this image within the assets directory.
    pub fn file_name(self) -> &'static str {
        match self {
            AppImage::Logo => "playtivity_logo.png",
            AppImage::LoginScreen => "playtivity_logo_login_screen.png",
            AppImage::ButtonIcon => "playtivity_logo_button_icon.png",
            AppImage::LargeDisplay => "playtivity_logo_large_display.png",
            AppImage::SmallIcon => "playtivity_logo_small_icon.png",
        }
    }

    /// Returns the pixel dimensions of this image as `(width, height)`.
    ///
    /// # Examples
    /// ```
    /// use launcher_icons::AppImage;
    /// assert_eq!(AppImage::ButtonIcon.dimensions(), (24, 24));
    /// assert_eq!(AppImage::LargeDisplay.dimensions(), (200, 200));
    /// ```
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AppImage::Logo => (120, 120),
            AppImage::LoginScreen => (120, 120),
            AppImage::ButtonIcon => (24, 24),
            AppImage::LargeDisplay => (200, 200),
            AppImage::SmallIcon => (48, 48),
        }
    }

    /// Returns a short note on where the app shows this image.
    pub fn usage(self) -> Option<&'static str> {
        match self {
            AppImage::Logo => Some("Main login screen"),
            _ => None,
        }
    }
}

impl fmt::Display for AppImage {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.write_str(self.file_name())
    }
}
