//! Deterministic region colors.
//!
//! Colors are a pure function of the region identifier: the identifier is
//! hashed with SHA-256 and the digest picks either a palette entry or a hue.
//! No ordering state is involved, so the map overlay, the legend and the
//! selector list agree on a region's color across sessions. Two regions may
//! share a color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::config::{ColorSettings, ColorStrategy};
use crate::core::error::EngineError;


/// 20-color categorical palette (Tableau 20).
pub const PALETTE: [Rgb; 20] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xae, 0xc7, 0xe8),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0xff, 0xbb, 0x78),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0x98, 0xdf, 0x8a),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0xff, 0x98, 0x96),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0xc5, 0xb0, 0xd5),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xc4, 0x9c, 0x94),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0xf7, 0xb6, 0xd2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xc7, 0xc7, 0xc7),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0xdb, 0xdb, 0x8d),
    Rgb::new(0x17, 0xbe, 0xcf),
    Rgb::new(0x9e, 0xda, 0xe5),
];

/// 24-bit RGB color, formatted as CSS hex (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzgeo_rust::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#1f77b4").unwrap(), Rgb::new(0x1f, 0x77, 0xb4));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, EngineError> {
        let digits = s.trim().trim_start_matches('#');
        let bytes = hex::decode(digits)
            .map_err(|e| EngineError::CatalogLoad(format!("Invalid color '{}': {}", s, e)))?;
        match bytes.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(EngineError::CatalogLoad(format!(
                "Invalid color '{}': expected 3 bytes",
                s
            ))),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// HSL color: `h` in degrees, `s` and `l` in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

        let (r1, g1, b1) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = l - c / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r1), channel(g1), channel(b1))
    }
}

/// Assigns a stable color to each region identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAssigner {
    strategy: ColorStrategy,
    saturation: f64,
    lightness: f64,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(&ColorSettings::default())
    }
}

impl ColorAssigner {
    pub fn new(settings: &ColorSettings) -> Self {
        Self {
            strategy: settings.strategy,
            saturation: settings.saturation,
            lightness: settings.lightness,
        }
    }

    /// Returns the color for `region_id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzgeo_rust::color::ColorAssigner;
    ///
    /// let colors = ColorAssigner::default();
    /// assert_eq!(colors.color_for("Asia/Tokyo"), colors.color_for("Asia/Tokyo"));
    /// ```
    pub fn color_for(&self, region_id: &str) -> Rgb {
        let h = identifier_hash(region_id);
        match self.strategy {
            ColorStrategy::Palette => PALETTE[(h % PALETTE.len() as u64) as usize],
            ColorStrategy::Hue => Hsl {
                h: (h % 3600) as f64 / 10.0,
                s: self.saturation,
                l: self.lightness,
            }
            .to_rgb(),
        }
    }
}

/// Palette color for `region_id` with the default settings.
pub fn color_for(region_id: &str) -> Rgb {
    ColorAssigner::default().color_for(region_id)
}

/// First 8 bytes of the SHA-256 digest of the identifier, big endian.
fn identifier_hash(region_id: &str) -> u64 {
    let digest = Sha256::digest(region_id.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}
