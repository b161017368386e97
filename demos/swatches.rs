//! Write `swatches.html` showing every color and colormap, each with
//! its grayscale rendering underneath.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use ipcc_colors::{named_colors, ColorRange, Palette, RGBColor};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn sampled(fh: &mut impl Write, range: impl ColorRange<RGB8>, n: usize,
           width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = range.range(0., 1., n).map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn palette(fh: &mut impl Write, p: Palette<RGB8>) -> Result<(), Err> {
    let name = p.name();
    table_of_colors(fh, &p.colors(), 40,
                    &format!("{name} ({} colors)", p.len()))?;
    sampled(fh, p.banded(), 200, 1, &format!("{name} (banded)"))?;
    sampled(fh, p.gradient(), 200, 1, &format!("{name} (interpolated)"))
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>IPCC colors: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Single colors</h3>")?;
    for c in named_colors() {
        let rgb = RGB8::from_rgb(c.rgb);
        table_of_colors(&mut fh, &[rgb], 40,
                        &format!("{} ({:?}) {}", c.name, c.role, css_string(rgb)))?;
    }

    for (title, family) in [("Temperature", RGB8::temperature()),
                            ("Precipitation", RGB8::precipitation())] {
        writeln!(fh, "<h3>{title}</h3>")?;
        for p in family { palette(&mut fh, p)?; }
    }

    writeln!(fh, "<h3>Single-hue sequential</h3>")?;
    for family in [RGB8::blue_single(), RGB8::purple_single(),
                   RGB8::red_single(), RGB8::green_single()] {
        for p in family { palette(&mut fh, p)?; }
    }

    writeln!(fh, "<h3>Multi-hue sequential</h3>")?;
    for family in [RGB8::blue_multi(), RGB8::purple_multi(),
                   RGB8::red_multi(), RGB8::green_multi()] {
        for p in family { palette(&mut fh, p)?; }
    }

    writeln!(fh, "<h3>Reversed</h3>")?;
    for name in ["t10_r", "p10_r"] {
        palette(&mut fh, RGB8::colormap(name)?)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
