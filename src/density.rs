use std::fmt;

/// Android screen density buckets, each with its own launcher icon size.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Density {
    /// Medium density (~160dpi), 48x48 icon.
    Mdpi,
    /// High density (~240dpi), 72x72 icon.
    Hdpi,
    /// Extra-high density (~320dpi), 96x96 icon.
    Xhdpi,
    /// Extra-extra-high density (~480dpi), 144x144 icon.
    Xxhdpi,
    /// Extra-extra-extra-high density (~640dpi), 192x192 icon.
    Xxxhdpi,
}

impl Density {
    /// Every density bucket, smallest first.
    pub const ALL: [Density; 5] = [Density::Mdpi,
                                   Density::Hdpi,
                                   Density::Xhdpi,
                                   Density::Xxhdpi,
                                   Density::Xxxhdpi];

    /// Returns the resource qualifier for this density (e.g. `xhdpi`).
    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Returns the edge length of the square launcher icon for this density,
    /// in pixels.
    ///
    /// # Examples
    /// ```
    /// use launcher_icons::Density;
    /// assert_eq!(Density::Mdpi.icon_size(), 48);
    /// assert_eq!(Density::Xxxhdpi.icon_size(), 192);
    /// ```
    pub fn icon_size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    /// Returns the name of the resource folder holding this density's
    /// launcher icon.
    ///
    /// # Examples
    /// ```
    /// use launcher_icons::Density;
    /// assert_eq!(Density::Hdpi.mipmap_dir(), "mipmap-hdpi");
    /// ```
    pub fn mipmap_dir(self) -> String {
        format!("mipmap-{}", self.name())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.write_str(self.name())
    }
}
