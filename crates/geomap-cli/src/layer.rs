//! `--layer <theme>=<path>` arguments.

use std::path::Path;
use std::str::FromStr;

use geomap_import::RasterDataType;
use geomap_raster::RasterFormat;

/// One raster layer requested on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerArg {
    pub kind: RasterDataType,
    pub locator: String,
}

impl LayerArg {
    pub fn format(&self, explicit: Option<RasterFormat>) -> Result<RasterFormat, String> {
        format_for(&self.locator, explicit)
    }
}

/// Container format: `explicit` if given, else guessed from the extension.
pub fn format_for(locator: &str, explicit: Option<RasterFormat>) -> Result<RasterFormat, String> {
    explicit
        .or_else(|| RasterFormat::from_path(Path::new(locator)))
        .ok_or_else(|| format!("cannot tell the format of '{locator}'; pass --format png|bmp"))
}

impl FromStr for LayerArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, locator) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <theme>=<path>, got '{s}'"))?;
        if locator.is_empty() {
            return Err(format!("layer '{kind}' has an empty path"));
        }
        let kind = kind.trim().parse().map_err(|e| format!("{e}"))?;
        Ok(Self {
            kind,
            locator: locator.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layer() {
        let layer: LayerArg = "water=maps/rivers.png".parse().unwrap();
        assert_eq!(layer.kind, RasterDataType::Water);
        assert_eq!(layer.locator, "maps/rivers.png");
    }

    #[test]
    fn test_path_may_contain_equals() {
        let layer: LayerArg = "trees=a=b.bmp".parse().unwrap();
        assert_eq!(layer.locator, "a=b.bmp");
    }

    #[test]
    fn test_parse_errors() {
        assert!("water".parse::<LayerArg>().is_err());
        assert!("water=".parse::<LayerArg>().is_err());
        let err = "lava=x.png".parse::<LayerArg>().unwrap_err();
        assert!(err.contains("lava"));
    }

    #[test]
    fn test_format_from_extension_or_flag() {
        let layer: LayerArg = "snow=peaks.BMP".parse().unwrap();
        assert_eq!(layer.format(None), Ok(RasterFormat::Bmp));
        assert_eq!(layer.format(Some(RasterFormat::Png)), Ok(RasterFormat::Png));

        let bare: LayerArg = "snow=peaks".parse().unwrap();
        assert!(bare.format(None).is_err());
    }
}
