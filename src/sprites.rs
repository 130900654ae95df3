//! Weather glyphs with multi-color layer support
//!
//! Each icon has a Card variant (for the forecast row) and a Hero variant (for the
//! current conditions). Multi-layer sprites composite several colored layers so that,
//! for example, the sun behind a cloud keeps its own color.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::state::Icon;

// ============================================================================
// Sprite data
// Every layer of one sprite has the same number of rows; spaces are transparent.
// ============================================================================

mod sprite_data {
    pub mod sun_max {
        pub const CARD_RAYS: &[&str] = &[r" \  |  / ", r"--     --", r" /  |  \ "];
        pub const CARD_CORE: &[&str] = &[r"         ", r"   (O)   ", r"         "];

        pub const HERO_RAYS: &[&str] = &[
            r"   \   |   /   ",
            r"               ",
            r" --         -- ",
            r"               ",
            r"   /   |   \   ",
        ];
        pub const HERO_CORE: &[&str] = &[
            r"               ",
            r"     .---.     ",
            r"    (     )    ",
            r"     `---'     ",
            r"               ",
        ];
    }
    pub mod moon_stars {
        pub const CARD_MOON: &[&str] = &[r"  .-.    ", r" (  (    ", r"  `-'    "];
        pub const CARD_STARS: &[&str] = &[r"     *   ", r"       * ", r"      .  "];

        pub const HERO_MOON: &[&str] = &[
            r"    _.._       ",
            r"  .' .-'`      ",
            r" /  /          ",
            r" \  '.___.;    ",
            r"  '._  _.'     ",
        ];
        pub const HERO_STARS: &[&str] = &[
            r"          *    ",
            r"            .  ",
            r"       *     * ",
            r"               ",
            r"            *  ",
        ];
    }
    pub mod cloud_sun {
        // Sun layer (background)
        pub const CARD_SUN: &[&str] = &[r"\ | /    ", r"-(O)     ", r"         "];
        // Cloud layer (foreground)
        pub const CARD_CLOUD: &[&str] = &[r"         ", r"    .--. ", r" .(____) "];

        pub const HERO_SUN: &[&str] = &[
            r"   \  |  /       ",
            r" --  .-.  --     ",
            r"    (   )        ",
            r"   /  |          ",
            r"                 ",
        ];
        pub const HERO_CLOUD: &[&str] = &[
            r"                 ",
            r"                 ",
            r"         .--.    ",
            r"     .-(    ).   ",
            r"    (___.__)__)  ",
        ];
    }
    pub mod cloud_drizzle {
        // Cloud layer (background)
        pub const CARD_CLOUD: &[&str] = &[r"  .--.   ", r"(______) ", r"         "];
        // Drizzle layer (foreground)
        pub const CARD_DROPS: &[&str] = &[r"         ", r"         ", r" ' ' ' ' "];

        pub const HERO_CLOUD: &[&str] = &[
            r"      .--.       ",
            r"   .-(    ).     ",
            r"  (___.__)__)    ",
            r"                 ",
            r"                 ",
        ];
        pub const HERO_DROPS: &[&str] = &[
            r"                 ",
            r"                 ",
            r"                 ",
            r"   ' ' ' ' '     ",
            r"  ' ' ' ' '      ",
        ];
    }
    pub mod snow {
        // Cloud layer (background)
        pub const CARD_CLOUD: &[&str] = &[r"  .--.   ", r"(______) ", r"         "];
        // Flake layer (foreground)
        pub const CARD_FLAKES: &[&str] = &[r"         ", r"         ", r" * * * * "];

        pub const HERO_CLOUD: &[&str] = &[
            r"      .--.       ",
            r"   .-(    ).     ",
            r"  (___.__)__)    ",
            r"                 ",
            r"                 ",
        ];
        pub const HERO_FLAKES: &[&str] = &[
            r"                 ",
            r"                 ",
            r"                 ",
            r"   *  *  *  *    ",
            r"    *  *  *      ",
        ];
    }
    pub mod tornado {
        pub const CARD_FUNNEL: &[&str] = &[r"(~~~~~~~)", r" (~~~~~) ", r"   (~)   "];
        pub const CARD_DEBRIS: &[&str] = &[r"         ", r"         ", r" .     . "];

        pub const HERO_FUNNEL: &[&str] = &[
            r" (~~~~~~~~~~~~~) ",
            r"  (~~~~~~~~~~~)  ",
            r"    (~~~~~~~)    ",
            r"      (~~~)      ",
            r"       (~)       ",
        ];
        pub const HERO_DEBRIS: &[&str] = &[
            r"                 ",
            r"                 ",
            r" .               ",
            r"              '  ",
            r"  .       .      ",
        ];
    }
}

// ============================================================================
// Layer compositing
// ============================================================================

type Rows = &'static [&'static str];

/// A single sprite layer with its content and color
struct SpriteLayer {
    rows: Rows,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_rows: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|layer| {
            layer
                .rows
                .iter()
                .map(|row| row.chars().collect::<Vec<_>>())
                .collect()
        })
        .collect();

    let max_rows = layer_rows.iter().map(Vec::len).max().unwrap_or(0);
    let max_width = layer_rows
        .iter()
        .flat_map(|rows| rows.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_rows);

    for row_idx in 0..max_rows {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            // Last layer is the foreground
            let mut found_char = ' ';
            let mut found_color = Color::Reset;

            for (layer_idx, layer) in layers.iter().enumerate().rev() {
                let ch = layer_rows[layer_idx]
                    .get(row_idx)
                    .and_then(|row| row.get(col_idx))
                    .copied();
                if let Some(ch) = ch.filter(|ch| *ch != ' ') {
                    found_char = ch;
                    found_color = layer.color;
                    break;
                }
            }

            spans.push(Span::styled(
                found_char.to_string(),
                Style::default().fg(found_color),
            ));
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Types
// ============================================================================

/// Sprite size categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 3 rows - forecast cards
    Card,
    /// 5 rows - current conditions
    Hero,
}

impl SpriteSize {
    pub const fn rows(self) -> u16 {
        match self {
            SpriteSize::Card => 3,
            SpriteSize::Hero => 5,
        }
    }

    /// Pick the largest sprite that fits the available height.
    /// Returns `None` if even the card sprite won't fit.
    pub fn for_height(available: u16) -> Option<Self> {
        match available {
            0..=2 => None,
            3..=4 => Some(SpriteSize::Card),
            _ => Some(SpriteSize::Hero),
        }
    }
}

const SUN_YELLOW: Color = Color::Yellow;
const SUN_CORE: Color = Color::Rgb(255, 190, 60);
const MOON: Color = Color::Rgb(245, 235, 180);
const STAR: Color = Color::Rgb(255, 255, 255);
const CLOUD: Color = Color::Rgb(200, 200, 210);
const RAIN_CLOUD: Color = Color::Rgb(160, 160, 175);
const DRIZZLE: Color = Color::Rgb(130, 170, 200);
const SNOWFLAKE: Color = Color::Rgb(200, 220, 255);
const FUNNEL: Color = Color::Rgb(150, 150, 165);
const DEBRIS: Color = Color::Rgb(120, 100, 80);

// ============================================================================
// Public API
// ============================================================================

/// Emoji representation for when sprites don't fit
pub fn icon_emoji(icon: Icon) -> &'static str {
    match icon {
        Icon::SunMax => "\u{2600}\u{fe0f}",
        Icon::MoonStars => "\u{1f319}",
        Icon::CloudSun => "\u{26c5}",
        Icon::CloudDrizzle => "\u{1f326}\u{fe0f}",
        Icon::Snow => "\u{2744}\u{fe0f}",
        Icon::Tornado => "\u{1f32a}\u{fe0f}",
    }
}

/// Get the largest sprite that fits, or `None` if the area is too short.
pub fn icon_sprite(icon: Icon, available_height: u16) -> Option<Text<'static>> {
    let size = SpriteSize::for_height(available_height)?;
    Some(get_sprite(icon, size))
}

/// Get art for the given icon and size
pub fn get_sprite(icon: Icon, size: SpriteSize) -> Text<'static> {
    use sprite_data::*;

    let pick = |card_rows: Rows, hero_rows: Rows| -> Rows {
        match size {
            SpriteSize::Card => card_rows,
            SpriteSize::Hero => hero_rows,
        }
    };

    let layers = match icon {
        Icon::SunMax => [
            SpriteLayer {
                rows: pick(sun_max::CARD_RAYS, sun_max::HERO_RAYS),
                color: SUN_YELLOW,
            },
            SpriteLayer {
                rows: pick(sun_max::CARD_CORE, sun_max::HERO_CORE),
                color: SUN_CORE,
            },
        ],
        Icon::MoonStars => [
            SpriteLayer {
                rows: pick(moon_stars::CARD_MOON, moon_stars::HERO_MOON),
                color: MOON,
            },
            SpriteLayer {
                rows: pick(moon_stars::CARD_STARS, moon_stars::HERO_STARS),
                color: STAR,
            },
        ],
        Icon::CloudSun => [
            SpriteLayer {
                rows: pick(cloud_sun::CARD_SUN, cloud_sun::HERO_SUN),
                color: SUN_YELLOW,
            },
            SpriteLayer {
                rows: pick(cloud_sun::CARD_CLOUD, cloud_sun::HERO_CLOUD),
                color: CLOUD,
            },
        ],
        Icon::CloudDrizzle => [
            SpriteLayer {
                rows: pick(cloud_drizzle::CARD_CLOUD, cloud_drizzle::HERO_CLOUD),
                color: RAIN_CLOUD,
            },
            SpriteLayer {
                rows: pick(cloud_drizzle::CARD_DROPS, cloud_drizzle::HERO_DROPS),
                color: DRIZZLE,
            },
        ],
        Icon::Snow => [
            SpriteLayer {
                rows: pick(snow::CARD_CLOUD, snow::HERO_CLOUD),
                color: RAIN_CLOUD,
            },
            SpriteLayer {
                rows: pick(snow::CARD_FLAKES, snow::HERO_FLAKES),
                color: SNOWFLAKE,
            },
        ],
        Icon::Tornado => [
            SpriteLayer {
                rows: pick(tornado::CARD_FUNNEL, tornado::HERO_FUNNEL),
                color: FUNNEL,
            },
            SpriteLayer {
                rows: pick(tornado::CARD_DEBRIS, tornado::HERO_DEBRIS),
                color: DEBRIS,
            },
        ],
    };

    composite_layers(&layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICONS: [Icon; 6] = [
        Icon::SunMax,
        Icon::MoonStars,
        Icon::CloudSun,
        Icon::CloudDrizzle,
        Icon::Snow,
        Icon::Tornado,
    ];

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_sprite_size_for_height() {
        assert_eq!(SpriteSize::for_height(0), None);
        assert_eq!(SpriteSize::for_height(2), None);
        assert_eq!(SpriteSize::for_height(3), Some(SpriteSize::Card));
        assert_eq!(SpriteSize::for_height(4), Some(SpriteSize::Card));
        assert_eq!(SpriteSize::for_height(5), Some(SpriteSize::Hero));
        assert_eq!(SpriteSize::for_height(40), Some(SpriteSize::Hero));
    }

    #[test]
    fn test_all_sprites_have_declared_height() {
        for icon in ICONS {
            for size in [SpriteSize::Card, SpriteSize::Hero] {
                let text = get_sprite(icon, size);
                assert_eq!(
                    text.lines.len(),
                    size.rows() as usize,
                    "Sprite {:?}/{:?} has the wrong height",
                    icon,
                    size
                );
            }
        }
    }

    #[test]
    fn test_card_sprites_fit_the_card() {
        for icon in ICONS {
            let text = get_sprite(icon, SpriteSize::Card);
            assert!(text.width() <= 9, "{icon:?} card sprite is too wide");
        }
    }

    #[test]
    fn test_foreground_layer_wins() {
        let rows = plain(&get_sprite(Icon::SunMax, SpriteSize::Card));
        assert_eq!(rows[1], "-- (O) --");
    }

    #[test]
    fn test_layers_keep_their_colors() {
        let text = get_sprite(Icon::CloudSun, SpriteSize::Card);
        let first = &text.lines[0].spans[0];
        assert_eq!(first.content, "\\");
        assert_eq!(first.style.fg, Some(SUN_YELLOW));

        let cloud = text.lines[2]
            .spans
            .iter()
            .find(|span| span.content == "_")
            .map(|span| span.style.fg);
        assert_eq!(cloud, Some(Some(CLOUD)));
    }

    #[test]
    fn test_icon_sprite_none_when_too_small() {
        assert!(icon_sprite(Icon::Snow, 2).is_none());
        assert!(icon_sprite(Icon::Snow, 3).is_some());
    }

    #[test]
    fn test_every_icon_has_emoji() {
        for icon in ICONS {
            assert!(!icon_emoji(icon).is_empty());
        }
    }
}
