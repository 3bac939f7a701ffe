use loam_blocks::Material;

/// Scene layer hint handed to the owner of rendering and physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Hidden, non-interactive objects (consumed fruit waiting to respawn).
    Background,
    Cloud,
    Leaves,
    /// Solid ground: terrain blocks and tree trunks.
    Ground,
    Fruit,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Background,
        Layer::Cloud,
        Layer::Leaves,
        Layer::Ground,
        Layer::Fruit,
    ];

    pub const fn for_material(material: Material) -> Layer {
        match material {
            Material::Ground | Material::Trunk => Layer::Ground,
            Material::Leaf => Layer::Leaves,
            Material::Cloud => Layer::Cloud,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Cloud => "cloud",
            Layer::Leaves => "leaves",
            Layer::Ground => "ground",
            Layer::Fruit => "fruit",
        }
    }
}
