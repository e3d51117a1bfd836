use plotters::style::RGBColor;

/// Series colors, matched to locations by position.
pub struct Palette {
    colors: Vec<RGBColor>,
}

impl Palette {
    /// The d3 category10 palette.
    pub fn category10() -> Self {
        Palette {
            colors: vec![
                RGBColor(0x1f, 0x77, 0xb4),
                RGBColor(0xff, 0x7f, 0x0e),
                RGBColor(0x2c, 0xa0, 0x2c),
                RGBColor(0xd6, 0x27, 0x28),
                RGBColor(0x94, 0x67, 0xbd),
                RGBColor(0x8c, 0x56, 0x4b),
                RGBColor(0xe3, 0x77, 0xc2),
                RGBColor(0x7f, 0x7f, 0x7f),
                RGBColor(0xbc, 0xbd, 0x22),
                RGBColor(0x17, 0xbe, 0xcf),
            ],
        }
    }

    /// Color for a series index, cycling past the palette's end.
    pub fn color(&self, index: usize) -> RGBColor {
        self.colors[index % self.colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_after_ten() {
        let palette = Palette::category10();
        assert_eq!(palette.color(0), palette.color(10));
        assert_eq!(palette.color(3), palette.color(13));
    }

    #[test]
    fn test_neighbors_differ() {
        let palette = Palette::category10();
        for i in 0..9 {
            assert_ne!(palette.color(i), palette.color(i + 1));
        }
    }
}
