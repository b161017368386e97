use anyhow::Error;
use ipcc_colors::{get_color, get_colormap, Color, PaletteType, RGBColor, Scheme};
use rgb::RGB8;

#[test]
fn write_colormap() -> Result<(), Error> {
    let p = get_colormap("p5_r")?;
    let json = serde_json::to_string_pretty(&p.colors())?;
    eprintln!("{}", json);
    let colors: Vec<Color> = serde_json::from_str(&json)?;
    assert_eq!(colors, p.colors());

    let bytes: Vec<RGB8> = RGB8::colormap("t11_r")?.colors();
    let json = serde_json::to_string(&bytes)?;
    assert_eq!(serde_json::from_str::<Vec<RGB8>>(&json)?, bytes);

    let desc = serde_json::to_string(&(p.scheme(), p.typ()))?;
    assert_eq!(desc, r#"["Precipitation","Div"]"#);
    let back: (Scheme, PaletteType) = serde_json::from_str(&desc)?;
    assert_eq!(back, (Scheme::Precipitation, PaletteType::Div));
    Ok(())
}

#[test]
fn write_color() -> Result<(), Error> {
    let c = get_color("l1")?;
    assert_eq!(serde_json::to_string(&c)?, r#"{"r":0.0,"g":0.0,"b":0.0}"#);
    Ok(())
}
