use std::f32::consts::{FRAC_PI_2, PI};

/// One of the four display walls, in cyclic navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    /// Navigation order; `next` walks forward through this list and wraps.
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];

    pub fn index(self) -> usize {
        match self {
            Wall::North => 0,
            Wall::East => 1,
            Wall::South => 2,
            Wall::West => 3,
        }
    }

    /// Any integer maps to a wall; negative values wrap backwards.
    pub fn from_index(index: i64) -> Wall {
        Self::ALL[index.rem_euclid(Self::ALL.len() as i64) as usize]
    }

    pub fn next(self) -> Wall {
        Self::from_index(self.index() as i64 + 1)
    }

    pub fn prev(self) -> Wall {
        Self::from_index(self.index() as i64 - 1)
    }

    /// Fixed camera azimuth (radians) that faces this wall.
    pub fn azimuth(self) -> f32 {
        match self {
            Wall::North => 0.0,
            Wall::East => FRAC_PI_2,
            Wall::South => PI,
            Wall::West => 3.0 * FRAC_PI_2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Wall::North => "N",
            Wall::East => "E",
            Wall::South => "S",
            Wall::West => "W",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Wall::North => "north",
            Wall::East => "east",
            Wall::South => "south",
            Wall::West => "west",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Embed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Media {
    pub kind: MediaKind,
    pub url: &'static str,
}

/// A single exhibited piece.
///
/// Fields:
/// - `id`: stable identifier, unique within the collection
/// - `source`: external link to the original work
/// - `media`: what the detail view shows
/// - `wall`: where the piece hangs; the navigation model assumes one per wall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtPiece {
    pub id: &'static str,
    pub title: &'static str,
    pub source: &'static str,
    pub description: &'static str,
    pub media: Media,
    pub wall: Wall,
}

pub const COLLECTION: [ArtPiece; 4] = [
    ArtPiece {
        id: "stripe-checkout",
        title: "Stripe Checkout Flow",
        source: "https://stripe.com",
        description: "Stripe's checkout is a masterclass in reducing friction. The single-page flow with inline validation, smart defaults, and that satisfying animation on submit. Every detail serves conversion.",
        media: Media {
            kind: MediaKind::Image,
            url: "/art/stripe-checkout.svg",
        },
        wall: Wall::North,
    },
    ArtPiece {
        id: "linear-app",
        title: "Linear Issue Tracker",
        source: "https://linear.app",
        description: "Linear proved that enterprise software doesn't have to feel heavy. Keyboard-first navigation, sub-100ms interactions, and a design language that makes project management feel like a craft.",
        media: Media {
            kind: MediaKind::Image,
            url: "/art/linear-app.svg",
        },
        wall: Wall::East,
    },
    ArtPiece {
        id: "vercel-dashboard",
        title: "Vercel Dashboard",
        source: "https://vercel.com",
        description: "The Vercel dashboard turns deployment complexity into visual clarity. Real-time build logs, branch previews at a glance, and a dark theme that makes monitoring feel cinematic.",
        media: Media {
            kind: MediaKind::Image,
            url: "/art/vercel-dashboard.svg",
        },
        wall: Wall::South,
    },
    ArtPiece {
        id: "arc-browser",
        title: "Arc Browser",
        source: "https://arc.net",
        description: "Arc reimagined what a browser could be. The collapsible sidebar, spaces for context-switching, and the command bar treat tabs as a design problem, not just a list.",
        media: Media {
            kind: MediaKind::Image,
            url: "/art/arc-browser.svg",
        },
        wall: Wall::West,
    },
];

/// First piece hanging on `wall`, if any.
pub fn piece_for_wall(collection: &[ArtPiece], wall: Wall) -> Option<&ArtPiece> {
    collection.iter().find(|p| p.wall == wall)
}

/// Accent color for a piece's canvas area until (or unless) its image is hung.
pub fn accent_color(piece: &ArtPiece) -> [f32; 3] {
    match piece.id {
        "stripe-checkout" => [0.39, 0.36, 0.98],
        "linear-app" => [0.37, 0.42, 0.82],
        "vercel-dashboard" => [0.08, 0.08, 0.09],
        "arc-browser" => [0.93, 0.38, 0.44],
        _ => [0.7, 0.7, 0.68],
    }
}
