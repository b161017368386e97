// Colors and color bands of the IPCC Visual Style Guide for Authors,
// https://www.ipcc.ch/site/assets/uploads/2019/04/IPCC-visual-style-guide.pdf

use std::collections::HashMap;
use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

macro_rules! colors {
    ($($name: literal => $role: ident ($r: literal, $g: literal, $b: literal)),*
     $(,)?) => {
        vec![$(ColorData { name: $name, role: ColorRole::$role,
                           rgb: RGB8::new($r, $g, $b) }),*]
    }
}

macro_rules! family {
    ($scheme: ident: $($name: literal => [$(($r: literal, $g: literal, $b: literal)),*
                                           $(,)?]),* $(,)?) => {
        vec![$(PaletteData { name: $name,
                             typ: Scheme::$scheme.typ(),
                             scheme: Scheme::$scheme,
                             rgb: vec![$(RGB8::new($r, $g, $b)),*] }),*]
    }
}

lazy_static! {
  pub(crate) static ref COLORS: Vec<ColorData> = colors![
      "l1" => Line(0, 0, 0),
      "l2" => Line(112, 160, 205),
      "l3" => Line(196, 121, 0),
      "l4" => Line(178, 178, 178),
      "l5" => Line(0, 52, 102),
      "l6" => Line(0, 79, 0),
      "l1s" => Shade(128, 128, 128),
      "l2s" => Shade(91, 174, 178),
      "l3s" => Shade(204, 174, 113),
      "l4s" => Shade(191, 191, 191),
      "l5s" => Shade(67, 147, 195),
      "l6s" => Shade(223, 237, 195),
      "r85l" => ScenarioLine(153, 0, 2),
      "r60l" => ScenarioLine(196, 121, 0),
      "r45l" => ScenarioLine(112, 160, 205),
      "r26l" => ScenarioLine(0, 52, 102),
      "r85s" => ScenarioShade(252, 209, 197),
      "r60s" => ScenarioShade(204, 174, 113),
      "r45s" => ScenarioShade(146, 197, 222),
      "r26s" => ScenarioShade(67, 147, 195),
  ];

  pub(crate) static ref COLOR_INDEX: HashMap<&'static str, &'static ColorData> =
      COLORS.iter().map(|c| (c.name, c)).collect();
}

lazy_static! {
  pub(crate) static ref TEMPERATURE: Vec<PaletteData> = family![Temperature:
      "t5" => [(202, 0, 32), (244, 165, 130), (247, 247, 247),
               (146, 197, 222), (5, 113, 176)],
      "t6" => [(178, 24, 43), (239, 138, 98), (253, 219, 199),
               (209, 229, 240), (103, 169, 207), (33, 102, 172)],
      "t7" => [(178, 24, 43), (239, 138, 98), (253, 219, 199),
               (247, 247, 247),
               (209, 229, 240), (103, 169, 207), (33, 102, 172)],
      "t8" => [(178, 24, 43), (214, 96, 77), (244, 165, 130), (253, 219, 199),
               (209, 229, 240), (146, 197, 222), (67, 147, 195), (33, 102, 172)],
      "t9" => [(178, 24, 43), (214, 96, 77), (244, 165, 130), (253, 219, 199),
               (247, 247, 247),
               (209, 229, 240), (146, 197, 222), (67, 147, 195), (33, 102, 172)],
      "t10" => [(103, 0, 31), (178, 24, 43), (214, 96, 77), (244, 165, 130),
                (253, 219, 199),
                (209, 229, 240), (146, 197, 222), (67, 147, 195), (33, 102, 172),
                (5, 48, 97)],
      "t11" => [(103, 0, 31), (178, 24, 43), (214, 96, 77), (244, 165, 130),
                (253, 219, 199), (247, 247, 247),
                (209, 229, 240), (146, 197, 222), (67, 147, 195), (33, 102, 172),
                (5, 48, 97)],
  ];

  pub(crate) static ref PRECIPITATION: Vec<PaletteData> = family![Precipitation:
      "p5" => [(166, 97, 26), (223, 194, 125), (245, 245, 245),
               (128, 205, 193), (1, 133, 113)],
      "p6" => [(140, 81, 10), (216, 179, 101), (246, 232, 195),
               (199, 234, 229), (90, 180, 172), (1, 102, 94)],
      "p7" => [(140, 81, 10), (216, 179, 101), (246, 232, 195),
               (245, 245, 245),
               (199, 234, 229), (90, 180, 172), (1, 102, 94)],
      "p8" => [(140, 81, 10), (191, 129, 45), (223, 194, 125), (246, 232, 195),
               (199, 234, 229), (128, 205, 193), (53, 151, 143), (1, 102, 94)],
      "p9" => [(140, 81, 10), (191, 129, 45), (223, 194, 125), (246, 232, 195),
               (245, 245, 245),
               (199, 234, 229), (128, 205, 193), (53, 151, 143), (1, 102, 94)],
      "p10" => [(84, 48, 5), (140, 81, 10), (191, 129, 45), (223, 194, 125),
                (246, 232, 195),
                (199, 234, 229), (128, 205, 193), (53, 151, 143), (1, 102, 94),
                (0, 60, 48)],
      "p11" => [(84, 48, 5), (140, 81, 10), (191, 129, 45), (223, 194, 125),
                (246, 232, 195), (245, 245, 245),
                (199, 234, 229), (128, 205, 193), (53, 151, 143), (1, 102, 94),
                (0, 60, 48)],
  ];
}

// Single-hue sequential schemes.
lazy_static! {
  pub(crate) static ref BLUE_SINGLE: Vec<PaletteData> = family![SingleHue:
      // The first stop is the one printed in the guide's digitized table.
      "blue3s" => [(222, 235, 147), (158, 202, 225), (49, 130, 189)],
      "blue4s" => [(239, 243, 255), (189, 215, 231), (107, 174, 214),
                   (33, 113, 181)],
      "blue5s" => [(239, 243, 255), (189, 215, 231), (107, 174, 214),
                   (49, 130, 189), (8, 81, 156)],
  ];

  pub(crate) static ref PURPLE_SINGLE: Vec<PaletteData> = family![SingleHue:
      "purple3s" => [(239, 237, 245), (188, 189, 220), (117, 107, 177)],
      "purple4s" => [(242, 240, 247), (203, 201, 226), (158, 154, 200),
                     (106, 81, 163)],
      "purple5s" => [(242, 240, 247), (203, 201, 226), (158, 154, 200),
                     (117, 107, 177), (84, 39, 143)],
  ];

  pub(crate) static ref RED_SINGLE: Vec<PaletteData> = family![SingleHue:
      "red3s" => [(254, 224, 210), (252, 146, 116), (222, 45, 38)],
      "red4s" => [(254, 229, 217), (252, 174, 145), (251, 106, 74),
                  (203, 24, 29)],
      "red5s" => [(254, 229, 217), (252, 174, 145), (251, 106, 74),
                  (222, 45, 38), (165, 15, 21)],
  ];

  pub(crate) static ref GREEN_SINGLE: Vec<PaletteData> = family![SingleHue:
      "green3s" => [(229, 245, 224), (161, 217, 155), (49, 163, 84)],
      "green4s" => [(237, 248, 233), (186, 228, 179), (116, 196, 118),
                    (35, 139, 69)],
      "green5s" => [(237, 248, 233), (186, 228, 179), (116, 196, 118),
                    (49, 163, 84), (0, 109, 44)],
  ];
}

// Multi-hue sequential schemes.
lazy_static! {
  pub(crate) static ref BLUE_MULTI: Vec<PaletteData> = family![MultiHue:
      "blue3m" => [(237, 248, 177), (127, 205, 187), (44, 127, 184)],
      "blue4m" => [(255, 255, 204), (161, 218, 180), (65, 182, 196),
                   (34, 94, 168)],
      "blue5m" => [(255, 255, 204), (161, 218, 180), (65, 182, 196),
                   (44, 127, 184), (37, 52, 148)],
  ];

  pub(crate) static ref PURPLE_MULTI: Vec<PaletteData> = family![MultiHue:
      "purple3m" => [(224, 236, 244), (158, 188, 218), (136, 86, 167)],
      "purple4m" => [(237, 248, 251), (179, 205, 227), (140, 150, 198),
                     (136, 65, 157)],
      "purple5m" => [(237, 248, 251), (179, 205, 227), (140, 150, 198),
                     (136, 86, 167), (129, 15, 124)],
  ];

  pub(crate) static ref RED_MULTI: Vec<PaletteData> = family![MultiHue:
      "red3m" => [(254, 237, 160), (254, 178, 76), (240, 59, 32)],
      "red4m" => [(255, 255, 178), (254, 204, 92), (253, 141, 60),
                  (227, 26, 28)],
      "red5m" => [(255, 255, 178), (254, 204, 92), (253, 141, 60),
                  (240, 59, 32), (189, 0, 38)],
  ];

  pub(crate) static ref GREEN_MULTI: Vec<PaletteData> = family![MultiHue:
      "green3m" => [(247, 252, 185), (173, 221, 142), (49, 163, 84)],
      "green4m" => [(255, 255, 204), (194, 230, 153), (120, 198, 121),
                    (35, 132, 67)],
      "green5m" => [(255, 255, 204), (194, 230, 153), (120, 198, 121),
                    (49, 163, 84), (0, 104, 55)],
  ];
}

lazy_static! {
  pub(crate) static ref ALL_FAMILIES: [&'static Vec<PaletteData>; 10] = [
      &*TEMPERATURE, &*PRECIPITATION,
      &*BLUE_SINGLE, &*PURPLE_SINGLE,
      &*RED_SINGLE, &*GREEN_SINGLE,
      &*BLUE_MULTI, &*PURPLE_MULTI,
      &*RED_MULTI, &*GREEN_MULTI];
}

/// All colormaps, in registry order.
pub(crate) fn all() -> impl Iterator<Item = &'static PaletteData> {
    ALL_FAMILIES.iter().flat_map(|v| v.iter())
}
