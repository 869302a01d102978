// =============================================================================
// CS:GO Pro Web - Glyph Catalog
// =============================================================================
// Stroke icons on a 24x24 viewBox (lucide geometry). Keep `GLYPHS` in sync
// with the statics below.
// =============================================================================

use super::Glyph;
use super::Shape::{Circle, Line, Path, Polygon, Polyline, Rect};

pub static HELP_CIRCLE: Glyph = Glyph {
    name: "help-circle",
    shapes: &[
        Circle { cx: 12.0, cy: 12.0, r: 10.0 },
        Path("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"),
        Path("M12 17h.01"),
    ],
};

// -----------------------------------------------------------------------------
// Navigation & Chrome
// -----------------------------------------------------------------------------

pub static MENU: Glyph = Glyph {
    name: "menu",
    shapes: &[
        Line { x1: 4.0, y1: 12.0, x2: 20.0, y2: 12.0 },
        Line { x1: 4.0, y1: 6.0, x2: 20.0, y2: 6.0 },
        Line { x1: 4.0, y1: 18.0, x2: 20.0, y2: 18.0 },
    ],
};

pub static X: Glyph = Glyph {
    name: "x",
    shapes: &[Path("M18 6 6 18"), Path("m6 6 12 12")],
};

pub static CHEVRON_DOWN: Glyph = Glyph {
    name: "chevron-down",
    shapes: &[Path("m6 9 6 6 6-6")],
};

pub static CHEVRON_RIGHT: Glyph = Glyph {
    name: "chevron-right",
    shapes: &[Path("m9 18 6-6-6-6")],
};

pub static ARROW_RIGHT: Glyph = Glyph {
    name: "arrow-right",
    shapes: &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
};

pub static PLAY: Glyph = Glyph {
    name: "play",
    shapes: &[Polygon("6 3 20 12 6 21 6 3")],
};

// -----------------------------------------------------------------------------
// Content
// -----------------------------------------------------------------------------

pub static CROSSHAIR: Glyph = Glyph {
    name: "crosshair",
    shapes: &[
        Circle { cx: 12.0, cy: 12.0, r: 10.0 },
        Line { x1: 22.0, y1: 12.0, x2: 18.0, y2: 12.0 },
        Line { x1: 6.0, y1: 12.0, x2: 2.0, y2: 12.0 },
        Line { x1: 12.0, y1: 6.0, x2: 12.0, y2: 2.0 },
        Line { x1: 12.0, y1: 22.0, x2: 12.0, y2: 18.0 },
    ],
};

pub static TARGET: Glyph = Glyph {
    name: "target",
    shapes: &[
        Circle { cx: 12.0, cy: 12.0, r: 10.0 },
        Circle { cx: 12.0, cy: 12.0, r: 6.0 },
        Circle { cx: 12.0, cy: 12.0, r: 2.0 },
    ],
};

pub static TROPHY: Glyph = Glyph {
    name: "trophy",
    shapes: &[
        Path("M6 9H4.5a2.5 2.5 0 0 1 0-5H6"),
        Path("M18 9h1.5a2.5 2.5 0 0 0 0-5H18"),
        Path("M4 22h16"),
        Path("M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"),
        Path("M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"),
        Path("M18 2H6v7a6 6 0 0 0 12 0V2Z"),
    ],
};

pub static CROWN: Glyph = Glyph {
    name: "crown",
    shapes: &[
        Path("m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7zm3 16h14"),
    ],
};

pub static MEDAL: Glyph = Glyph {
    name: "medal",
    shapes: &[
        Path("M7.21 15 2.66 7.14a2 2 0 0 1 .13-2.2L4.4 2.8A2 2 0 0 1 6 2h12a2 2 0 0 1 1.6.8l1.6 2.14a2 2 0 0 1 .14 2.2L16.79 15"),
        Path("M11 12 5.12 2.2"),
        Path("m13 12 5.88-9.8"),
        Path("M8 7h8"),
        Circle { cx: 12.0, cy: 17.0, r: 5.0 },
        Path("M12 18v-2h-.5"),
    ],
};

pub static SHIELD: Glyph = Glyph {
    name: "shield",
    shapes: &[Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10")],
};

pub static USERS: Glyph = Glyph {
    name: "users",
    shapes: &[
        Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
        Circle { cx: 9.0, cy: 7.0, r: 4.0 },
        Path("M22 21v-2a4 4 0 0 0-3-3.87"),
        Path("M16 3.13a4 4 0 0 1 0 7.75"),
    ],
};

pub static USER: Glyph = Glyph {
    name: "user",
    shapes: &[
        Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
        Circle { cx: 12.0, cy: 7.0, r: 4.0 },
    ],
};

pub static CLOCK: Glyph = Glyph {
    name: "clock",
    shapes: &[
        Circle { cx: 12.0, cy: 12.0, r: 10.0 },
        Polyline("12 6 12 12 16 14"),
    ],
};

pub static CALENDAR: Glyph = Glyph {
    name: "calendar",
    shapes: &[
        Rect { x: 3.0, y: 4.0, width: 18.0, height: 18.0, rx: 2.0 },
        Line { x1: 16.0, y1: 2.0, x2: 16.0, y2: 6.0 },
        Line { x1: 8.0, y1: 2.0, x2: 8.0, y2: 6.0 },
        Line { x1: 3.0, y1: 10.0, x2: 21.0, y2: 10.0 },
    ],
};

pub static NEWSPAPER: Glyph = Glyph {
    name: "newspaper",
    shapes: &[
        Path("M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2"),
        Path("M18 14h-8"),
        Path("M15 18h-5"),
        Path("M10 6h8v4h-8V6Z"),
    ],
};

pub static MAP: Glyph = Glyph {
    name: "map",
    shapes: &[
        Polygon("3 6 9 3 15 6 21 3 21 18 15 21 9 18 3 21"),
        Line { x1: 9.0, y1: 3.0, x2: 9.0, y2: 18.0 },
        Line { x1: 15.0, y1: 6.0, x2: 15.0, y2: 21.0 },
    ],
};

pub static MAP_PIN: Glyph = Glyph {
    name: "map-pin",
    shapes: &[
        Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
        Circle { cx: 12.0, cy: 10.0, r: 3.0 },
    ],
};

pub static GLOBE: Glyph = Glyph {
    name: "globe",
    shapes: &[
        Circle { cx: 12.0, cy: 12.0, r: 10.0 },
        Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
        Path("M2 12h20"),
    ],
};

pub static FLAG: Glyph = Glyph {
    name: "flag",
    shapes: &[
        Path("M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z"),
        Line { x1: 4.0, y1: 22.0, x2: 4.0, y2: 15.0 },
    ],
};

pub static ZAP: Glyph = Glyph {
    name: "zap",
    shapes: &[Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
};

pub static SWORD: Glyph = Glyph {
    name: "sword",
    shapes: &[
        Polyline("14.5 17.5 3 6 3 3 6 3 17.5 14.5"),
        Line { x1: 13.0, y1: 19.0, x2: 19.0, y2: 13.0 },
        Line { x1: 16.0, y1: 16.0, x2: 20.0, y2: 20.0 },
        Line { x1: 19.0, y1: 21.0, x2: 21.0, y2: 19.0 },
    ],
};

pub static SWORDS: Glyph = Glyph {
    name: "swords",
    shapes: &[
        Polyline("14.5 17.5 3 6 3 3 6 3 17.5 14.5"),
        Line { x1: 13.0, y1: 19.0, x2: 19.0, y2: 13.0 },
        Line { x1: 16.0, y1: 16.0, x2: 20.0, y2: 20.0 },
        Line { x1: 19.0, y1: 21.0, x2: 21.0, y2: 19.0 },
        Polyline("14.5 6.5 18 3 21 3 21 6 17.5 9.5"),
        Line { x1: 5.0, y1: 14.0, x2: 9.0, y2: 18.0 },
        Line { x1: 7.0, y1: 17.0, x2: 4.0, y2: 20.0 },
        Line { x1: 3.0, y1: 19.0, x2: 5.0, y2: 21.0 },
    ],
};

pub static FLAME: Glyph = Glyph {
    name: "flame",
    shapes: &[Path(
        "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z",
    )],
};

pub static MOUSE: Glyph = Glyph {
    name: "mouse",
    shapes: &[
        Rect { x: 5.0, y: 2.0, width: 14.0, height: 20.0, rx: 7.0 },
        Path("M12 6v4"),
    ],
};

pub static GHOST: Glyph = Glyph {
    name: "ghost",
    shapes: &[
        Path("M9 10h.01"),
        Path("M15 10h.01"),
        Path("M12 2a8 8 0 0 0-8 8v12l3-3 2.5 2.5L12 19l2.5 2.5L17 19l3 3V10a8 8 0 0 0-8-8z"),
    ],
};

pub static HEART: Glyph = Glyph {
    name: "heart",
    shapes: &[Path(
        "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
    )],
};

// -----------------------------------------------------------------------------
// Social
// -----------------------------------------------------------------------------

pub static TWITTER: Glyph = Glyph {
    name: "twitter",
    shapes: &[Path(
        "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
    )],
};

pub static YOUTUBE: Glyph = Glyph {
    name: "youtube",
    shapes: &[
        Path("M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"),
        Path("m10 15 5-3-5-3z"),
    ],
};

pub static TWITCH: Glyph = Glyph {
    name: "twitch",
    shapes: &[Path("M21 2H3v16h5v4l4-4h5l4-4V2zm-10 9V7m5 4V7")],
};

pub static INSTAGRAM: Glyph = Glyph {
    name: "instagram",
    shapes: &[
        Rect { x: 2.0, y: 2.0, width: 20.0, height: 20.0, rx: 5.0 },
        Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
        Line { x1: 17.5, y1: 6.5, x2: 17.51, y2: 6.5 },
    ],
};

/// Every glyph the resolver can return, fallback included.
pub static GLYPHS: &[&Glyph] = &[
    &HELP_CIRCLE,
    &MENU,
    &X,
    &CHEVRON_DOWN,
    &CHEVRON_RIGHT,
    &ARROW_RIGHT,
    &PLAY,
    &CROSSHAIR,
    &TARGET,
    &TROPHY,
    &CROWN,
    &MEDAL,
    &SHIELD,
    &USERS,
    &USER,
    &CLOCK,
    &CALENDAR,
    &NEWSPAPER,
    &MAP,
    &MAP_PIN,
    &GLOBE,
    &FLAG,
    &ZAP,
    &SWORD,
    &SWORDS,
    &FLAME,
    &MOUSE,
    &GHOST,
    &HEART,
    &TWITTER,
    &YOUTUBE,
    &TWITCH,
    &INSTAGRAM,
];
