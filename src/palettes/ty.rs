pub(crate) use rgb::RGB8;

/// A colormap of the IPCC style guide.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGB8>, // Invariant: length ≥ 3
    pub(crate) typ: PaletteType,
    pub(crate) scheme: Scheme,
}

/// A single named color of the IPCC style guide.
pub(crate) struct ColorData {
    pub(crate) name: &'static str,
    pub(crate) rgb: RGB8,
    pub(crate) role: ColorRole,
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class or break in the middle of the legend
    /// is emphasized with light colors and low and high extremes are
    /// emphasized with dark colors that have contrasting hues.
    Div,
}

/// The family a colormap belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Red (warm) to blue (cold), `t5` to `t11`.
    Temperature,
    /// Brown (dry) to blue-green (wet), `p5` to `p11`.
    Precipitation,
    /// Lightness steps within one hue, `blue3s` to `green5s`.
    SingleHue,
    /// Lightness steps across neighbouring hues, `blue3m` to `green5m`.
    MultiHue,
}

impl Scheme {
    /// The type of every palette of this scheme.
    pub fn typ(self) -> PaletteType {
        match self {
            Scheme::Temperature | Scheme::Precipitation => PaletteType::Div,
            Scheme::SingleHue | Scheme::MultiHue => PaletteType::Seq,
        }
    }
}

/// What a single color is meant to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorRole {
    /// Line colors `l1` to `l6`.
    Line,
    /// Shading (uncertainty range) colors `l1s` to `l6s`.
    Shade,
    /// Lines of the RCP scenarios: `r85l`, `r60l`, `r45l`, `r26l`.
    ScenarioLine,
    /// Shading of the RCP scenarios: `r85s`, `r60s`, `r45s`, `r26s`.
    ScenarioShade,
}
