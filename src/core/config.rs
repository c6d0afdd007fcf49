//! Run-time configuration object + fluent builder.

use std::{fmt, str::FromStr};

use crate::core::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, HMAX, WMAX},
    error::ConfigError,
};

/// Named plot glyphs selectable from the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Style {
    #[default]
    Asterisk,
    Dash,
    Period,
}

impl Style {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Asterisk => '*',
            Self::Dash => '-',
            Self::Period => '.',
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Self::Asterisk),
            "d" => Ok(Self::Dash),
            "p" => Ok(Self::Period),
            _ => Err(format!(
                "unknown style '{s}', expected (a)sterisk (d)ash or (p)eriod"
            )),
        }
    }
}

/// How a series longer than the chart is squeezed into it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Compression {
    /// Mean of each window.
    Average,
    /// First sample of each window.
    #[default]
    Select,
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "average" => Ok(Self::Average),
            "s" | "select" => Ok(Self::Select),
            _ => Err(format!(
                "unknown compression '{s}', expected (a)verage or (s)elect"
            )),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Average => "average",
            Self::Select => "select",
        })
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub glyph: char,
    pub compression: Compression,
}

impl Config {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            glyph: Style::default().glyph(),
            compression: Compression::default(),
        }
    }
}

/// Fluent builder; nothing is checked until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    glyph: Option<char>,
    compression: Option<Compression>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    pub fn width_opt(mut self, w: Option<usize>) -> Self {
        if w.is_some() {
            self.width = w;
        }
        self
    }
    #[inline]
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }
    #[inline]
    pub fn height_opt(mut self, h: Option<usize>) -> Self {
        if h.is_some() {
            self.height = h;
        }
        self
    }
    #[inline]
    pub fn style(mut self, s: Style) -> Self {
        self.glyph = Some(s.glyph());
        self
    }
    #[inline]
    pub fn glyph(mut self, c: char) -> Self {
        self.glyph = Some(c);
        self
    }
    #[inline]
    pub fn compression(mut self, c: Compression) -> Self {
        self.compression = Some(c);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let width = self.width.unwrap_or(defaults.width);
        let height = self.height.unwrap_or(defaults.height);
        let glyph = self.glyph.unwrap_or(defaults.glyph);

        if width == 0 || width >= WMAX {
            return Err(ConfigError::Width(width));
        }
        if height == 0 || height >= HMAX {
            return Err(ConfigError::Height(height));
        }
        if !glyph.is_ascii_graphic() {
            return Err(ConfigError::Glyph(glyph));
        }
        Ok(Config {
            width,
            height,
            glyph,
            compression: self.compression.unwrap_or(defaults.compression),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_chart() {
        let cfg = Config::builder().build().unwrap();
        assert_eq!(cfg.width, 69);
        assert_eq!(cfg.height, 17);
        assert_eq!(cfg.glyph, '*');
        assert_eq!(cfg.compression, Compression::Select);
    }

    #[test]
    fn bounds_are_exclusive() {
        assert_eq!(
            Config::builder().width(WMAX).build(),
            Err(ConfigError::Width(WMAX))
        );
        assert_eq!(
            Config::builder().height(HMAX).build(),
            Err(ConfigError::Height(HMAX))
        );
        assert_eq!(Config::builder().width(0).build(), Err(ConfigError::Width(0)));
        assert_eq!(
            Config::builder().height(0).build(),
            Err(ConfigError::Height(0))
        );

        let cfg = Config::builder().width(WMAX - 1).height(HMAX - 1).build().unwrap();
        assert_eq!((cfg.width, cfg.height), (999, 499));
    }

    #[test]
    fn width_is_checked_before_height() {
        let err = Config::builder().width(5000).height(5000).build();
        assert_eq!(err, Err(ConfigError::Width(5000)));
    }

    #[test]
    fn glyph_must_be_printable() {
        assert_eq!(
            Config::builder().glyph(' ').build(),
            Err(ConfigError::Glyph(' '))
        );
        assert_eq!(
            Config::builder().glyph('\t').build(),
            Err(ConfigError::Glyph('\t'))
        );
        assert_eq!(Config::builder().glyph('#').build().unwrap().glyph, '#');
    }

    #[test]
    fn optional_setters_keep_earlier_values() {
        let cfg = Config::builder()
            .width(40)
            .width_opt(None)
            .height_opt(Some(9))
            .build()
            .unwrap();
        assert_eq!((cfg.width, cfg.height), (40, 9));
    }

    #[test]
    fn styles_and_modes_parse_from_letters() {
        assert_eq!("a".parse::<Style>().unwrap().glyph(), '*');
        assert_eq!("d".parse::<Style>().unwrap().glyph(), '-');
        assert_eq!("p".parse::<Style>().unwrap().glyph(), '.');
        assert!("q".parse::<Style>().is_err());

        assert_eq!("a".parse::<Compression>(), Ok(Compression::Average));
        assert_eq!("select".parse::<Compression>(), Ok(Compression::Select));
        assert!("x".parse::<Compression>().is_err());
    }
}
