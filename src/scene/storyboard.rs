//! Built-in storyboard: "Old-Fangled Future".
//!
//! A time traveller leaves 1831 for 2030 and discovers what things cost.
//! Seven scenes laid out for the default 80x22 canvas; larger or smaller
//! canvases simply clip.

use ratatui::style::Color;

use super::{Cue, RegistryError, Scene, SceneContext, SceneRegistry};
use crate::stage::{Canvas, TextAlign};

const BG_1831: Color = Color::Rgb(0x2f, 0x2a, 0x25);
const GROUND_1831: Color = Color::Rgb(0x3b, 0x35, 0x2e);
const SMOKE: Color = Color::Rgb(0x69, 0x63, 0x5c);
const FLASH: Color = Color::Rgb(0xff, 0xff, 0xff);
const STREET: Color = Color::Rgb(0x0a, 0x0f, 0x18);
const STORE: Color = Color::Rgb(0x13, 0x17, 0x22);
const NEON_BLUE: Color = Color::Rgb(0x3b, 0xdc, 0xff);
const NEON_PINK: Color = Color::Rgb(0xff, 0x4f, 0xb0);
const PANEL: Color = Color::Rgb(0x11, 0x13, 0x17);
const PEDESTAL: Color = Color::Rgb(0xd9, 0xdf, 0xe7);
const COMPUTER: Color = Color::Rgb(0x9a, 0xa3, 0xad);
const LABEL: Color = Color::Rgb(0xe7, 0xe9, 0xee);
const BUBBLE: Color = Color::Rgb(0xf6, 0xf7, 0xfb);
const INK: Color = Color::Rgb(0x1a, 0x1d, 0x24);
const HERO: Color = Color::Rgb(0x22, 0xe3, 0xc7);
const MERCHANT: Color = Color::Rgb(0xff, 0x55, 0xaa);

const SHOP_CUES: [Cue; 3] = [
    Cue::new(1.2, "Fifty-nine thousand, eight hundred thirty-two dollars.", 1.0),
    Cue::new(
        2.4,
        "WHATTHE?! HOW IS THIS POSSIBLE? You people are so rich!",
        1.0,
    ),
    Cue::new(3.6, "That's normal price for a dirt piece.", 1.0),
];

const NASA_CUES: [Cue; 4] = [
    Cue::new(
        0.8,
        "Ninety-nine trillion, nine hundred ninety-nine billion, zero ninety-nine million, \
         seven hundred ninety-nine billion, eight hundred eighty-seven million, \
         eight hundred seventy-eight thousand, seven hundred eighty-nine, \
         seven hundred nine dollars, if you are not subbed to Cetus P-two-n.",
        0.95,
    ),
    Cue::new(3.2, "How much without?", 1.0),
    Cue::new(
        4.0,
        "Seventy-five nonillion, eight hundred forty-seven octillion, \
         five hundred forty-three septillion, seven hundred fifty-nine sextillion, \
         eight hundred forty-seven quintillion, five hundred eighty-four quadrillion, \
         three hundred twenty-seven trillion, and so on.",
        0.95,
    ),
    Cue::new(5.2, "He faints.", 1.0),
];

/// The scenes of the built-in sequence, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storyboard {
    CivilWar,
    Teleport,
    FutureStreet,
    OldFangledShop,
    NasaStreet,
    NasaShop,
    EndCard,
}

impl Storyboard {
    pub const ALL: [Storyboard; 7] = [
        Storyboard::CivilWar,
        Storyboard::Teleport,
        Storyboard::FutureStreet,
        Storyboard::OldFangledShop,
        Storyboard::NasaStreet,
        Storyboard::NasaShop,
        Storyboard::EndCard,
    ];

    /// Registry holding the whole sequence.
    pub fn registry() -> Result<SceneRegistry<Storyboard>, RegistryError> {
        SceneRegistry::new(Self::ALL.to_vec())
    }
}

impl Scene for Storyboard {
    fn name(&self) -> &str {
        match self {
            Self::CivilWar => "1831 Civil War",
            Self::Teleport => "Teleport",
            Self::FutureStreet => "2030 Street - Old-Fangled Things",
            Self::OldFangledShop => "Inside Old-Fangled Things",
            Self::NasaStreet => "Back to street - NASA Computers 67",
            Self::NasaShop => "Inside NASA shop - absurd pricing",
            Self::EndCard => "End card",
        }
    }

    fn duration(&self) -> f64 {
        match self {
            Self::CivilWar => 3.0,
            Self::Teleport => 1.6,
            Self::FutureStreet => 3.2,
            Self::OldFangledShop => 4.2,
            Self::NasaStreet => 2.8,
            Self::NasaShop => 5.4,
            Self::EndCard => 2.0,
        }
    }

    fn on_enter(&self, ctx: &mut SceneContext<'_>) {
        let (subtitle, line, rate) = match self {
            Self::CivilWar => (
                "Year: 1831 - Civil War",
                "The year is 1831. The civil war rages. One man stands in the middle.",
                1.0,
            ),
            Self::Teleport => ("", "I'm going to 2030.", 1.1),
            Self::FutureStreet => (
                "2030 - Downtown",
                "He lands on a futuristic street, beside a store called Old-Fangled Things.",
                1.0,
            ),
            Self::OldFangledShop => ("iPhone 67", "How much do this cost, bucko?", 1.05),
            Self::NasaStreet => ("NASA Computers 67", "He heads to NASA Computers 67.", 1.0),
            Self::NasaShop => ("6767667676766776nasa", "How much?", 1.0),
            Self::EndCard => (
                "Old-Fangled Future - Subscribe to Cetus-P2n?",
                "Old-Fangled Future. Subscribe to Cetus P-two-n?",
                1.0,
            ),
        };
        ctx.set_subtitle(subtitle);
        ctx.narrate(line, rate);
    }

    fn cues(&self) -> &[Cue] {
        match self {
            Self::OldFangledShop => &SHOP_CUES,
            Self::NasaShop => &NASA_CUES,
            _ => &[],
        }
    }

    fn draw(&self, t: f64, ctx: &mut SceneContext<'_>) {
        match self {
            Self::CivilWar => draw_civil_war(ctx.canvas(), t),
            Self::Teleport => draw_teleport(ctx.canvas(), t),
            Self::FutureStreet => draw_future_street(ctx.canvas(), t),
            Self::OldFangledShop => draw_old_fangled_shop(ctx.canvas(), t),
            Self::NasaStreet => draw_nasa_street(ctx.canvas(), t),
            Self::NasaShop => {
                draw_nasa_shop(ctx.canvas(), t);
                if t > 4.8 {
                    ctx.set_subtitle("Thud.");
                }
            }
            Self::EndCard => draw_end_card(ctx.canvas()),
        }
    }
}

/// Stick figure; `(x, y)` is the head.
fn figure(canvas: &mut Canvas, x: i32, y: i32, color: Color) {
    canvas.put(x, y, 'o', color);
    canvas.text(x - 1, y + 1, "/|\\", color, TextAlign::Left);
    canvas.text(x - 1, y + 2, "/ \\", color, TextAlign::Left);
}

/// Storefront box with its name on the top row.
fn store(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, name: &str, neon: Color) {
    canvas.fill_rect(x, y, w, h, STORE);
    canvas.frame_rect(x, y, w, h, neon);
    canvas.text(x + w / 2, y + 1, name, neon, TextAlign::Center);
}

/// Speech bubble one row tall.
fn bubble(canvas: &mut Canvas, x: i32, y: i32, w: i32, text: &str) {
    canvas.fill_rect(x, y, w, 1, BUBBLE);
    canvas.text(x + 1, y, text, INK, TextAlign::Left);
}

fn draw_civil_war(canvas: &mut Canvas, t: f64) {
    canvas.fill(BG_1831);
    canvas.fill_rect(0, 17, canvas.width() as i32, 5, GROUND_1831);

    for i in 0..6 {
        let x = 6 + i * 12;
        let y = 10 + (t * 2.0 + i as f64).sin().round() as i32;
        canvas.text(x, y, "(@@)", SMOKE, TextAlign::Left);
    }

    let bob = (t * 4.0).sin().round() as i32;
    figure(canvas, 40, 14 + bob, HERO);

    canvas.text(2, 1, "Year: 1831 - Civil War", LABEL, TextAlign::Left);
    canvas.text(2, 3, "Character: I'm going to 2030", LABEL, TextAlign::Left);
}

fn draw_teleport(canvas: &mut Canvas, t: f64) {
    let alpha = (1.0 - t).max(0.0);
    let level = (alpha * 255.0) as u8;
    canvas.fill(Color::Rgb(level, level, level));

    let (cx, cy) = (40, 11);
    canvas.ring(cx, cy, 6.0 * (0.8 + 0.2 * (t * 6.0).sin()), '*', FLASH);
    canvas.ring(cx, cy, 4.0 * (0.8 + 0.2 * (t * 7.0).cos()), 'o', NEON_BLUE);
    canvas.ring(cx, cy, 2.5 * (0.8 + 0.2 * (t * 8.0).sin()), '.', NEON_PINK);

    let fade = (1.0 - t * 0.8).max(0.0);
    if fade > 0.5 {
        figure(canvas, cx, cy - 1, HERO);
    } else if fade > 0.15 {
        figure(canvas, cx, cy - 1, SMOKE);
    }
}

fn draw_future_street(canvas: &mut Canvas, t: f64) {
    canvas.fill(STREET);
    store(canvas, 6, 8, 20, 10, "Old-Fangled Things", NEON_BLUE);
    store(canvas, 32, 8, 18, 10, "Snack Nebula", NEON_PINK);
    store(canvas, 58, 9, 18, 8, "Drift Coffee 8", NEON_BLUE);

    let walk = 5 + (t * 5.0) as i32;
    figure(canvas, 2 + walk, 17, HERO);

    let right = canvas.width() as i32 - 2;
    canvas.text(right, 1, "2030 - Downtown", NEON_BLUE, TextAlign::Right);
}

fn draw_old_fangled_shop(canvas: &mut Canvas, t: f64) {
    canvas.fill(PANEL);

    canvas.fill_rect(32, 14, 16, 3, PEDESTAL);
    canvas.text(40, 13, "iPhone 67", LABEL, TextAlign::Center);

    store(canvas, 8, 13, 12, 5, "Desk", NEON_PINK);
    figure(canvas, 25, 15, HERO);
    figure(canvas, 60, 15, MERCHANT);

    bubble(canvas, 17, 10, 31, "How much do this cost, bucko?");
    bubble(canvas, 52, 10, 10, "$59,832");

    let shake = (t * 16.0).sin().round() as i32;
    canvas.text(13 + shake, 3, "WHATTHE?! HOW IS THIS POSSIBLE?", NEON_PINK, TextAlign::Left);
    canvas.text(13 - shake, 4, "U PEOPLE ARE SO RICH!", NEON_PINK, TextAlign::Left);
    canvas.text(13, 6, "That's normal price for a dirt piece.", NEON_BLUE, TextAlign::Left);
}

fn draw_nasa_street(canvas: &mut Canvas, t: f64) {
    canvas.fill(STREET);
    store(canvas, 10, 8, 24, 10, "NASA Computers 67", NEON_PINK);
    store(canvas, 43, 9, 18, 8, "Cloud 9.9", NEON_BLUE);

    let walk = (t * 11.7 + 5.0).min(31.7) as i32;
    figure(canvas, 6 + walk, 17, HERO);
}

fn draw_nasa_shop(canvas: &mut Canvas, t: f64) {
    canvas.fill(PANEL);

    canvas.fill_rect(23, 10, 34, 8, COMPUTER);
    canvas.frame_rect(23, 10, 34, 8, LABEL);
    canvas.text(25, 11, "6767667676766776nasa", INK, TextAlign::Left);

    figure(canvas, 62, 15, MERCHANT);

    let tilt = if t > 3.8 { ((t - 3.8) * 18.0).min(15.0) } else { 0.0 };
    if tilt > 7.5 {
        canvas.text(12, 19, "o-|-<", HERO, TextAlign::Left);
    } else {
        figure(canvas, 16, 15, HERO);
    }

    bubble(
        canvas,
        4,
        2,
        72,
        "Seller: $99,999,099,999,979,887,878,789,709 (not subbed to Cetus-P2n)",
    );
    bubble(canvas, 4, 4, 72, "Character: How much without?");
    bubble(
        canvas,
        4,
        6,
        72,
        "Manager: $75,847,543,759,847,584,327,584,375,843,758,758,748,574,357,022,020",
    );
}

fn draw_end_card(canvas: &mut Canvas) {
    canvas.fill(Color::Black);
    let mid_x = canvas.width() as i32 / 2;
    let mid_y = canvas.height() as i32 / 2;
    canvas.text(mid_x, mid_y - 1, "Old-Fangled Future", NEON_BLUE, TextAlign::Center);
    canvas.text(mid_x, mid_y + 1, "Subscribe to Cetus-P2n?", NEON_PINK, TextAlign::Center);
}
