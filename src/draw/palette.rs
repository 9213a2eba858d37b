//! Terrain palette held for map drawing.

use super::color::Rgba;
use std::fmt;

/// Terrain categories that have a slot in the map palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTerrain {
    Grass,
    Land,
    Ocean,
    Sand,
    Shallows,
    Snow,
}

impl MapTerrain {
    pub const ALL: [MapTerrain; 6] = [
        MapTerrain::Grass,
        MapTerrain::Land,
        MapTerrain::Ocean,
        MapTerrain::Sand,
        MapTerrain::Shallows,
        MapTerrain::Snow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MapTerrain::Grass => "grass",
            MapTerrain::Land => "land",
            MapTerrain::Ocean => "ocean",
            MapTerrain::Sand => "sand",
            MapTerrain::Shallows => "shallows",
            MapTerrain::Snow => "snow",
        }
    }
}

impl fmt::Display for MapTerrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One optional color per terrain category; unset slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapPalette {
    pub grass: Option<Rgba>,
    pub land: Option<Rgba>,
    pub ocean: Option<Rgba>,
    pub sand: Option<Rgba>,
    pub shallows: Option<Rgba>,
    pub snow: Option<Rgba>,
}

impl MapPalette {
    fn slot_mut(&mut self, terrain: MapTerrain) -> &mut Option<Rgba> {
        match terrain {
            MapTerrain::Grass => &mut self.grass,
            MapTerrain::Land => &mut self.land,
            MapTerrain::Ocean => &mut self.ocean,
            MapTerrain::Sand => &mut self.sand,
            MapTerrain::Shallows => &mut self.shallows,
            MapTerrain::Snow => &mut self.snow,
        }
    }

    pub fn get(&self, terrain: MapTerrain) -> Option<Rgba> {
        match terrain {
            MapTerrain::Grass => self.grass,
            MapTerrain::Land => self.land,
            MapTerrain::Ocean => self.ocean,
            MapTerrain::Sand => self.sand,
            MapTerrain::Shallows => self.shallows,
            MapTerrain::Snow => self.snow,
        }
    }

    pub fn set(&mut self, terrain: MapTerrain, color: Rgba) {
        *self.slot_mut(terrain) = Some(color);
    }
}
