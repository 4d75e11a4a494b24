//! Static content tables: quotes, visualization frame sets, and breath
//! patterns. Everything here is fixed at build time; the CLI validates
//! names before any lookup happens.

use rand::prelude::*;

/// An inspirational quote shown once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "Breathing in, I calm body and mind. Breathing out, I smile.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "The only way to live is by accepting each minute as an unrepeatable miracle.",
        author: "Tara Brach",
    },
    Quote {
        text: "Be where you are; otherwise you will miss your life.",
        author: "Buddha",
    },
    Quote {
        text: "When you own your breath, nobody can steal your peace.",
        author: "Unknown",
    },
    Quote {
        text: "Smile, breathe, and go slowly.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "Breathing is the greatest pleasure in life.",
        author: "Giovanni Papini",
    },
    Quote {
        text: "Your breath is your anchor to the present moment.",
        author: "Sharon Salzberg",
    },
    Quote {
        text: "The breath is the bridge which connects life to consciousness.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "Peace begins with a smile.",
        author: "Mother Teresa",
    },
    Quote {
        text: "Within you there is a stillness and sanctuary to which you can retreat at any time.",
        author: "Hermann Hesse",
    },
    Quote {
        text: "Life is not measured by the breaths we take, but by the moments that take our breath away.",
        author: "Maya Angelou",
    },
    Quote {
        text: "Let go of the thoughts that don't make you strong.",
        author: "Karen Salmansohn",
    },
];

/// Pick a quote uniformly at random.
pub fn random_quote() -> &'static Quote {
    let mut rng = rand::rng();
    QUOTES.choose(&mut rng).unwrap_or(&QUOTES[0])
}

/// A named breathing technique: how many seconds each phase of the
/// cycle lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Square,
    Relaxed,
    Zen,
    Energy,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Square,
        Pattern::Relaxed,
        Pattern::Zen,
        Pattern::Energy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Square => "square",
            Pattern::Relaxed => "relaxed",
            Pattern::Zen => "zen",
            Pattern::Energy => "energy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Phase durations in seconds, in cycle order. A zero means the
    /// phase is skipped.
    pub fn phase_seconds(self) -> [u64; 4] {
        match self {
            Pattern::Square => [4, 4, 4, 4],
            // 4-7-8 technique
            Pattern::Relaxed => [4, 7, 8, 0],
            Pattern::Zen => [6, 0, 6, 0],
            Pattern::Energy => [2, 0, 2, 0],
        }
    }
}

/// A named frame set depicting one breath, empty to full and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Circle,
    Wave,
    Lotus,
    Zen,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Circle, Style::Wave, Style::Lotus, Style::Zen];

    pub fn name(self) -> &'static str {
        match self {
            Style::Circle => "circle",
            Style::Wave => "wave",
            Style::Lotus => "lotus",
            Style::Zen => "zen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The full cycle's frames. Every set has an even length of at
    /// least 2 and a uniform display width, so phase slices line up
    /// when overwritten in place.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Style::Circle => &[" ○ ", " ◔ ", " ◑ ", " ◕ ", " ● ", " ◕ ", " ◑ ", " ◔ "],
            Style::Wave => &[
                " ▁ ", " ▂ ", " ▃ ", " ▄ ", " ▅ ", " ▆ ", " ▇ ", " █ ", " ▇ ", " ▆ ", " ▅ ",
                " ▄ ", " ▃ ", " ▂ ",
            ],
            Style::Lotus => &[" ✾ ", " ✿ ", " ❀ ", " ✿ "],
            Style::Zen => &[" ☯ ", " ॐ ", " ☸ ", " ⚛ "],
        }
    }
}

/// One stage of a breath cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl Phase {
    /// Cycle order: inhale, hold, exhale, rest.
    pub const CYCLE: [Phase; 4] = [Phase::Inhale, Phase::Hold, Phase::Exhale, Phase::Rest];

    /// Display label, padded to a fixed width so frames from different
    /// phases overwrite each other cleanly.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::Hold => "Hold  ",
            Phase::Exhale => "Exhale",
            Phase::Rest => "Rest  ",
        }
    }

    /// Seconds this phase lasts under `pattern`.
    pub fn seconds(self, pattern: Pattern) -> u64 {
        let [inhale, hold, exhale, rest] = pattern.phase_seconds();
        match self {
            Phase::Inhale => inhale,
            Phase::Hold => hold,
            Phase::Exhale => exhale,
            Phase::Rest => rest,
        }
    }

    /// The slice of `style`'s frame set this phase plays.
    ///
    /// Inhale sweeps the first half (empty to full) and exhale the
    /// second (full back to empty). Hold and rest visualize no
    /// transition, so they repeat a single frame: the midpoint and the
    /// empty frame respectively.
    pub fn frames(self, style: Style) -> &'static [&'static str] {
        let frames = style.frames();
        let mid = frames.len() / 2;
        match self {
            Phase::Inhale => &frames[..mid],
            Phase::Hold => &frames[mid..=mid],
            Phase::Exhale => &frames[mid..],
            Phase::Rest => &frames[..1],
        }
    }
}
