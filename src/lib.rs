//! Colors and colormaps of the [IPCC Visual Style Guide for
//! Authors](https://www.ipcc.ch/site/assets/uploads/2019/04/IPCC-visual-style-guide.pdf).
//!
//! - single colors by name: [`get_color`] (`"l1"` … `"l6"`, `"l1s"` …
//!   `"l6s"`, `"r85l"`, `"r26s"`,…), see [`named_colors`];
//! - colormaps by name: [`get_colormap`] (`"t5"` … `"t11"`, `"p5"` …
//!   `"p11"`, `"blue3s"` … `"green5m"`), see [`colormap_names`].
//!   Append `"_r"` to the name to reverse the colormap.
//!
//! A [`Palette`] gives its discrete colors, a linear [`gradient`]
//! through them and a [`banded`] sampler.  Both implement
//! [`ColorRange`].  Colors can be produced in any encoding implementing
//! [`RGBColor`].
//!
//! ```
//! use ipcc_colors::{get_color, get_colormap, ColorRange};
//! let c = get_color("l2")?;
//! assert!((c.g - 160. / 255.).abs() < 1e-12);
//! let cmap = get_colormap("green5m_r")?;
//! assert_eq!(cmap.len(), 5);
//! let mid = cmap.gradient().rgb(0.5);
//! # Ok::<(), ipcc_colors::Error>(())
//! ```
//!
//! [`gradient`]: Palette::gradient
//! [`banded`]: Palette::banded

use std::fmt;
use std::marker::PhantomData;
use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8};

mod error;
mod palettes;
use palettes::ty::PaletteData;
pub use error::Error;
pub use palettes::ty::{ColorRole, PaletteType, Scheme};

/// RGB color with channels in \[0, 1\].
pub type Color = RGB<f64>;

/// Return the color with 8-bit channels `r`, `g` and `b`, each
/// divided by 255.
///
/// # Example
///
/// ```
/// let c = ipcc_colors::normalize(112, 160, 205)?;
/// assert!((c.b - 0.8039).abs() < 1e-4);
/// assert!(ipcc_colors::normalize(0, 256, 0).is_err());
/// # Ok::<(), ipcc_colors::Error>(())
/// ```
pub fn normalize(r: i64, g: i64, b: i64) -> Result<Color, Error> {
    fn channel(v: i64) -> Result<f64, Error> {
        if (0 ..= 255).contains(&v) { Ok(v as f64 / 255.) }
        else { Err(Error::ChannelOutOfRange(v)) }
    }
    Ok(Color { r: channel(r)?, g: channel(g)?, b: channel(b)? })
}

#[inline]
fn from_rgb8(c: RGB8) -> Color {
    Color { r: c.r as f64 / 255., g: c.g as f64 / 255., b: c.b as f64 / 255. }
}

#[inline]
fn lerp(c0: Color, c1: Color, t: f64) -> Color {
    Color { r: c0.r + t * (c1.r - c0.r),
            g: c0.g + t * (c1.g - c0.g),
            b: c0.b + t * (c1.b - c0.b) }
}

/// Return the single color `name`.
///
/// Fails with [`Error::UnknownColor`] if `name` is not one of
/// [`color_names`].
pub fn get_color(name: &str) -> Result<Color, Error> {
    Color::color(name)
}

/// Return the colormap designated by `name`.
///
/// The colormap whose name is the longest prefix of `name` is chosen,
/// so `"t10"`, `"t10_r"` and `"t10 bands"` all select `"t10"`.  If
/// `name` contains `"_r"` (after its first character), the order of
/// the colors is reversed.  Fails with [`Error::UnknownColormap`] if
/// no colormap name is a prefix of `name`.
pub fn get_colormap(name: &str) -> Result<Palette<Color>, Error> {
    Color::colormap(name)
}

/// A single color of the style guide with its name and role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub role: ColorRole,
    pub rgb: Color,
}

/// Iterate over all single colors, lines first, then shadings, then
/// the scenario lines and shadings.
pub fn named_colors() -> impl Iterator<Item = NamedColor> {
    palettes::COLORS.iter().map(|c| NamedColor {
        name: c.name, role: c.role, rgb: from_rgb8(c.rgb) })
}

/// Names accepted by [`get_color`].
pub fn color_names() -> impl Iterator<Item = &'static str> {
    palettes::COLORS.iter().map(|c| c.name)
}

/// Names of all colormaps (without the `"_r"` suffix).
pub fn colormap_names() -> impl Iterator<Item = &'static str> {
    palettes::all().map(|p| p.name)
}

fn resolve(name: &str) -> Result<(&'static PaletteData, bool), Error> {
    let palette = palettes::all()
        .filter(|p| name.starts_with(p.name))
        .max_by_key(|p| p.name.len())
        .ok_or_else(|| Error::UnknownColormap(name.to_string()))?;
    let reversed = matches!(name.find("_r"), Some(i) if i > 0);
    log::debug!("colormap {name:?} resolved to {:?}{}",
                palette.name, if reversed { " (reversed)" } else { "" });
    Ok((palette, reversed))
}


/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<C> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> C;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, C>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        let (i, j) = if n == 0 { (1, 0) } else { (0, n - 1) };
        Range { range: self, color: PhantomData, a, b,
                last: n.saturating_sub(1), i, j }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, C> {
    range: R,
    color: PhantomData<C>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    last: usize,
    i: usize, // first position to be consumed (empty if i > j)
    j: usize, // last position to be consumed
}

impl<R, C> Range<R, C> where R: ColorRange<C> {
    /// Return the abscissa and color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn at(&self, k: usize) -> (f64, C) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let flast = self.last as f64;
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / flast;
            let mut x = (alpha * self.a + beta * self.b) / flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }

    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, C> Iterator for Range<R, C>
where R: ColorRange<C> {
    type Item = (f64, C);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.at(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, C> ExactSizeIterator for Range<R, C>
where R: ColorRange<C> {}

impl<R, C> DoubleEndedIterator for Range<R, C>
where R: ColorRange<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.at(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(item)
    }
}


/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color
    /// (in \[0, 1\]).
    fn to_rgb(&self) -> Color;

    /// Create a color from its RGB components (in \[0, 1\]).
    fn from_rgb(c: Color) -> Self;

    /// Return the single color `name` in this encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use ipcc_colors::RGBColor;
    /// assert_eq!(RGB8::color("r85l")?, RGB8::new(153, 0, 2));
    /// # Ok::<(), ipcc_colors::Error>(())
    /// ```
    fn color(name: &str) -> Result<Self, Error> {
        match palettes::COLOR_INDEX.get(name) {
            Some(c) => {
                log::debug!("color {name:?} is {:?}", c.rgb);
                Ok(Self::from_rgb(from_rgb8(c.rgb)))
            }
            None => Err(Error::UnknownColor(name.to_string())),
        }
    }

    /// Return the colormap designated by `name` in this encoding.
    /// See [`get_colormap`] for how `name` is interpreted.
    fn colormap(name: &str) -> Result<Palette<Self>, Error> {
        let (palette, reversed) = resolve(name)?;
        Ok(Palette { palette, reversed, color: PhantomData })
    }

    /// Find palettes matching certain criteria.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use ipcc_colors::{RGBColor, PaletteType};
    /// let div: Vec<_> = RGB8::palettes(10).typ(PaletteType::Div).find()
    ///     .map(|p| p.key()).collect();
    /// assert_eq!(div, ["t10", "t11", "p10", "p11"]);
    /// ```
    fn palettes(len: usize) -> PaletteFind<Self> {
        PaletteFind { len, typ: vec![], scheme: vec![], color: PhantomData }
    }

    /// Temperature colormaps `t5` to `t11` (diverging, warm to cold).
    #[inline]
    fn temperature() -> PaletteIter<Self> { PaletteIter::new(&palettes::TEMPERATURE) }

    /// Precipitation colormaps `p5` to `p11` (diverging, dry to wet).
    #[inline]
    fn precipitation() -> PaletteIter<Self> {
        PaletteIter::new(&palettes::PRECIPITATION)
    }

    /// Single-hue "light to dark blue" schemes `blue3s` to `blue5s`.
    #[inline]
    fn blue_single() -> PaletteIter<Self> { PaletteIter::new(&palettes::BLUE_SINGLE) }

    /// Single-hue "light to dark purple" schemes `purple3s` to `purple5s`.
    #[inline]
    fn purple_single() -> PaletteIter<Self> {
        PaletteIter::new(&palettes::PURPLE_SINGLE)
    }

    /// Single-hue "light to dark red" schemes `red3s` to `red5s`.
    #[inline]
    fn red_single() -> PaletteIter<Self> { PaletteIter::new(&palettes::RED_SINGLE) }

    /// Single-hue "light to dark green" schemes `green3s` to `green5s`.
    #[inline]
    fn green_single() -> PaletteIter<Self> {
        PaletteIter::new(&palettes::GREEN_SINGLE)
    }

    /// Multi-hue "light yellow to green to dark blue" schemes `blue3m`
    /// to `blue5m`.
    #[inline]
    fn blue_multi() -> PaletteIter<Self> { PaletteIter::new(&palettes::BLUE_MULTI) }

    /// Multi-hue "light blue to dark purple" schemes `purple3m` to
    /// `purple5m`.
    #[inline]
    fn purple_multi() -> PaletteIter<Self> {
        PaletteIter::new(&palettes::PURPLE_MULTI)
    }

    /// Multi-hue "light yellow to orange to dark red" schemes `red3m`
    /// to `red5m`.
    #[inline]
    fn red_multi() -> PaletteIter<Self> { PaletteIter::new(&palettes::RED_MULTI) }

    /// Multi-hue "light yellow to dark green" schemes `green3m` to
    /// `green5m`.
    #[inline]
    fn green_multi() -> PaletteIter<Self> { PaletteIter::new(&palettes::GREEN_MULTI) }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGB { r, g, b } = self.to_rgb();
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgb(Color { r: x, g: x, b: x })
    }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> Color { *self }

    #[inline]
    fn from_rgb(c: Color) -> Self { c }
}

impl RGBColor for RGB<f32> {
    #[inline]
    fn to_rgb(&self) -> Color {
        Color { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    #[inline]
    fn from_rgb(c: Color) -> Self {
        RGB { r: c.r as f32, g: c.g as f32, b: c.b as f32 }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgb(&self) -> Color { Color { r: self.r, g: self.g, b: self.b } }

    #[inline]
    fn from_rgb(c: Color) -> Self { RGBA { r: c.r, g: c.g, b: c.b, a: 1. } }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> Color { from_rgb8(*self) }

    #[inline]
    fn from_rgb(c: Color) -> Self {
        RGB8 { r: (255. * c.r).round() as u8,
               g: (255. * c.g).round() as u8,
               b: (255. * c.b).round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> Color {
        from_rgb8(RGB8 { r: self.r, g: self.g, b: self.b })
    }

    #[inline]
    fn from_rgb(c: Color) -> Self {
        let RGB8 { r, g, b } = RGB8::from_rgb(c);
        RGBA8 { r, g, b, a: 255 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> Color {
        Color { r: self.r as f64 / 65535.,
                g: self.g as f64 / 65535.,
                b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_rgb(c: Color) -> Self {
        RGB16 { r: (65535. * c.r).round() as u16,
                g: (65535. * c.g).round() as u16,
                b: (65535. * c.b).round() as u16 }
    }
}


/// # Colormaps
///
/// A discrete colormap of the style guide, possibly reversed.
/// Created by [`get_colormap`], [`RGBColor::colormap`] or the
/// family iterators of [`RGBColor`].
#[derive(Clone, Copy)]
pub struct Palette<C> {
    palette: &'static PaletteData,
    reversed: bool,
    color: PhantomData<C>,
}

impl<C> fmt::Debug for Palette<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("name", &self.name())
            .field("len", &self.len())
            .finish()
    }
}

impl<C> Palette<C> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, reversed: false, color: PhantomData }
    }

    /// Returns the number of colors (aka bands) in the palette.
    ///
    /// Palettes contain at least 3 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// The name of the colormap in the registry, such as `"t10"`.
    pub fn key(&self) -> &'static str { self.palette.name }

    /// The canonical name of the palette: [`key`][Palette::key],
    /// followed by `"_r"` if reversed.
    pub fn name(&self) -> String {
        if self.reversed { format!("{}_r", self.palette.name) }
        else { self.palette.name.to_string() }
    }

    /// Whether the colors are in the reverse order of the registry.
    pub fn is_reversed(&self) -> bool { self.reversed }

    /// The same palette with its colors in the opposite order.
    pub fn reversed(self) -> Self {
        Self { reversed: !self.reversed, ..self }
    }

    /// Says whether the palette is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// The family the palette belongs to.
    pub fn scheme(&self) -> Scheme { self.palette.scheme }

    /// The normalized stops, in display order.
    fn stops(&self) -> Vec<Color> {
        let stops = self.palette.rgb.iter().map(|&c| from_rgb8(c));
        if self.reversed { stops.rev().collect() } else { stops.collect() }
    }
}

impl<C> Palette<C>
where C: RGBColor {
    /// Returns the colors of the palette, in order.
    pub fn colors(&self) -> Vec<C> {
        self.stops().into_iter().map(C::from_rgb).collect()
    }

    /// Returns a gradient constructed from the palette: consecutive
    /// colors are joined by linear segments of equal width, the first
    /// color being at `t = 0` and the last at `t = 1`.
    pub fn gradient(&self) -> PaletteGradient<C> {
        PaletteGradient { stops: self.stops(), color: PhantomData }
    }

    /// Returns a sampler splitting \[0, 1\] in [`len`][Palette::len]
    /// bands of equal width, each of uniform color.
    pub fn banded(&self) -> PaletteBands<C> {
        PaletteBands { stops: self.stops(), color: PhantomData }
    }
}

/// A linear gradient based on a [`Palette`].
pub struct PaletteGradient<C> {
    stops: Vec<Color>, // Invariant: length ≥ 2
    color: PhantomData<C>,
}

impl<C> ColorRange<C> for PaletteGradient<C>
where C: RGBColor {
    fn rgb(&self, t: f64) -> C {
        let n = self.stops.len() - 1;
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        let c = if i < n { lerp(self.stops[i], self.stops[i + 1], tn.fract()) }
                else { self.stops[n] };
        C::from_rgb(c)
    }
}

/// Discrete bands based on a [`Palette`].
pub struct PaletteBands<C> {
    stops: Vec<Color>, // Invariant: non empty
    color: PhantomData<C>,
}

impl<C> ColorRange<C> for PaletteBands<C>
where C: RGBColor {
    fn rgb(&self, t: f64) -> C {
        let n = self.stops.len();
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        C::from_rgb(self.stops[i.min(n - 1)])
    }
}

/// An exact size iterator over [`Palette`]s.
#[derive(Clone, Copy)]
pub struct PaletteIter<C> {
    palettes: &'static Vec<PaletteData>,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // position after the last one to be consumed
    color: PhantomData<C>,
}

impl<C> PaletteIter<C> {
    fn new(palettes: &'static Vec<PaletteData>) -> Self {
        Self { palettes, i: 0, j: palettes.len(), color: PhantomData }
    }
}

impl<C> Iterator for PaletteIter<C> {
    type Item = Palette<C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let x = Palette::new(&self.palettes[self.i]);
        self.i += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl<C> ExactSizeIterator for PaletteIter<C> {}

impl<C> DoubleEndedIterator for PaletteIter<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        Some(Palette::new(&self.palettes[self.j]))
    }
}


/// Set criteria to find matching palettes.
///
/// Created by [`RGBColor::palettes`].
#[derive(Clone)]
pub struct PaletteFind<C> {
    len: usize,
    typ: Vec<PaletteType>,
    scheme: Vec<Scheme>,
    color: PhantomData<C>,
}

impl<C> PaletteFind<C> {
    /// Find [`Palette`]s with this type.  Use several times to
    /// specify more than one [`PaletteType`].
    pub fn typ(mut self, t: PaletteType) -> Self {
        self.typ.push(t);
        self
    }

    /// Find [`Palette`]s of this family.  Use several times to
    /// specify more than one [`Scheme`].
    pub fn scheme(mut self, s: Scheme) -> Self {
        self.scheme.push(s);
        self
    }

    /// Return the palettes with at least `len` colors (and
    /// satisfying the criteria set with other methods), in registry
    /// order.
    pub fn find(self) -> impl Iterator<Item = Palette<C>> {
        let PaletteFind { len, typ, scheme, .. } = self;
        palettes::all()
            .filter(move |p| {
                p.rgb.len() >= len
                    && (typ.is_empty() || typ.contains(&p.typ))
                    && (scheme.is_empty() || scheme.contains(&p.scheme))
            })
            .map(Palette::new)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(c: Color, r: f64, g: f64, b: f64) -> bool {
        (c.r - r).abs() <= 1e-12 && (c.g - g).abs() <= 1e-12
            && (c.b - b).abs() <= 1e-12
    }

    #[test]
    fn normalize_bounds() {
        assert_eq!(normalize(0, 0, 0), Ok(Color { r: 0., g: 0., b: 0. }));
        assert_eq!(normalize(255, 255, 255), Ok(Color { r: 1., g: 1., b: 1. }));
        assert_eq!(normalize(-1, 0, 0), Err(Error::ChannelOutOfRange(-1)));
        assert_eq!(normalize(0, 0, 300), Err(Error::ChannelOutOfRange(300)));
    }

    #[test]
    fn longest_prefix_wins() {
        let (p, rev) = resolve("t10").unwrap();
        assert_eq!((p.name, rev), ("t10", false));
        let (p, rev) = resolve("t11_r").unwrap();
        assert_eq!((p.name, rev), ("t11", true));
        let (p, rev) = resolve("blue3s").unwrap();
        assert_eq!((p.name, rev), ("blue3s", false));
        let (p, _) = resolve("p5 bands").unwrap();
        assert_eq!(p.name, "p5");
        assert!(resolve("t1").is_err());
        assert!(resolve("_rt5").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn registry_is_consistent() {
        assert_eq!(color_names().count(), 20);
        assert_eq!(colormap_names().count(), 38);
        for p in palettes::all() {
            assert_eq!(p.typ, p.scheme.typ());
            let digits: String = p.name.chars()
                .filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(digits.parse::<usize>().unwrap(), p.rgb.len(),
                       "{}", p.name);
        }
    }

    #[test]
    fn gradient_hits_stops() {
        let p = get_colormap("t5").unwrap();
        let g = p.gradient();
        let stops = p.colors();
        for (k, s) in stops.iter().enumerate() {
            let c: Color = g.rgb(k as f64 / 4.);
            assert!(close(c, s.r, s.g, s.b), "stop {k}: {c:?} ≠ {s:?}");
        }
        let c: Color = g.rgb(0.125);
        let m = lerp(stops[0], stops[1], 0.5);
        assert!(close(c, m.r, m.g, m.b));
        let c: Color = g.rgb(-3.);
        assert!(close(c, stops[0].r, stops[0].g, stops[0].b));
        let c: Color = g.rgb(7.);
        assert!(close(c, stops[4].r, stops[4].g, stops[4].b));
    }

    #[test]
    fn gradient_range() {
        let g = RGB8::colormap("red5m").unwrap().gradient();
        let samples: Vec<(f64, RGB8)> = g.range(0., 2., 11).collect();
        assert_eq!(samples.len(), 11);
        for (i, &(x, _)) in samples.iter().enumerate() {
            assert!((x - 0.2 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.2 * i as f64);
        }
        assert_eq!(samples[0].1, RGB8::new(255, 255, 178));
        assert_eq!(samples[10].1, RGB8::new(189, 0, 38));
    }

    #[test]
    fn range_edge_cases() {
        let g = get_colormap("p7").unwrap().gradient();
        assert_eq!(ColorRange::<Color>::range(g, 0., 1., 0).count(), 0);
        let g = get_colormap("p7").unwrap().gradient();
        let mut r = ColorRange::<Color>::range(g, 1., 0., 3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.next_back().map(|(x, _)| x), Some(0.));
        assert_eq!(r.next().map(|(x, _)| x), Some(1.));
        assert_eq!(r.next().map(|(x, _)| x), Some(0.5));
        assert_eq!(r.len(), 0);
        assert!(r.next().is_none());
        assert!(r.next_back().is_none());
    }

    #[test]
    fn banded_sampling() {
        let p = RGB8::colormap("green4s").unwrap();
        let b = p.banded();
        let stops: Vec<RGB8> = p.colors();
        assert_eq!(b.rgb(0.), stops[0]);
        assert_eq!(b.rgb(0.24), stops[0]);
        assert_eq!(b.rgb(0.25), stops[1]);
        assert_eq!(b.rgb(0.74), stops[2]);
        assert_eq!(b.rgb(0.99), stops[3]);
        assert_eq!(b.rgb(1.), stops[3]);
    }

    #[test]
    fn gray() {
        let g = RGB8::new(128, 128, 128).to_gray();
        assert_eq!(g, RGB8::new(128, 128, 128));
        // 0.299 * 153 + 0.587 * 0 + 0.114 * 2 = 45.975
        let g = RGB8::color("r85l").unwrap().to_gray();
        assert_eq!(g, RGB8::new(46, 46, 46));
        let g = get_color("l6").unwrap().to_gray();
        assert!(close(g, 0.587 * 79. / 255., 0.587 * 79. / 255., 0.587 * 79. / 255.));
    }

    #[test]
    fn encodings() {
        let c = RGB16::color("l2").unwrap();
        assert_eq!(c, RGB16::new(112 * 257, 160 * 257, 205 * 257));
        let back = c.to_rgb();
        assert!((back.r - 112. / 255.).abs() <= 1e-12
                && (back.g - 160. / 255.).abs() <= 1e-12
                && (back.b - 205. / 255.).abs() <= 1e-12, "{back:?}");
        assert_eq!(RGB16::color("l1").unwrap(), RGB16::new(0, 0, 0));
        assert_eq!(RGB16::from_rgb(Color { r: 1., g: 1., b: 1. }),
                   RGB16::new(65535, 65535, 65535));

        let c = RGB::<f32>::color("l2").unwrap();
        assert_eq!(c, RGB::new((112f64 / 255.) as f32, (160f64 / 255.) as f32,
                               (205f64 / 255.) as f32));
        let back = c.to_rgb();
        assert!((back.g - 160. / 255.).abs() <= 1e-6);

        let c = RGBA::<f64>::color("r45s").unwrap();
        assert_eq!(c, RGBA::new(146. / 255., 197. / 255., 222. / 255., 1.));
        assert!(close(c.to_rgb(), 146. / 255., 197. / 255., 222. / 255.));

        assert_eq!(RGBA8::color("r60l").unwrap(), RGBA8::new(196, 121, 0, 255));
        assert_eq!(RGBA8::new(196, 121, 0, 7).to_rgb(), get_color("r60l").unwrap());

        // Every 8-bit stop survives the trip through [0, 1].
        for p in RGB8::palettes(0).find() {
            let stops: Vec<RGB8> = p.colors();
            assert_eq!(stops, p.palette.rgb, "{}", p.key());
        }
    }
}
