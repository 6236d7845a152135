//! Categorical color grids, one per luminance level.
//!
//! Each grid covers CIE 1931 chromaticity with x starting at [`X_ORIGIN`] and y
//! starting at [`Y_ORIGIN`], both stepping by [`STEP`]. Rows run along x and
//! the first row has the smallest y. A cell holds one category code or `.`
//! where the chromaticity lies outside the object colors at that luminance.
//!
//! | code | category |
//! | ---- | -------- |
//! | `W`  | white |
//! | `K`  | black |
//! | `R`  | red |
//! | `G`  | green |
//! | `Y`  | yellow |
//! | `B`  | blue |
//! | `N`  | brown |
//! | `P`  | purple |
//! | `I`  | pink |
//! | `O`  | orange |
//! | `A`  | gray |

use crate::color::Component;

pub(super) const X_ORIGIN: Component = 0.14;
pub(super) const Y_ORIGIN: Component = 0.06;
pub(super) const STEP: Component = 0.02;

/// The luminance levels of the grids, in the same order as [`GRIDS`].
pub(super) const LUMINANCE_LEVELS: [Component; 6] = [2.0, 5.0, 10.0, 20.0, 30.0, 40.0];

#[rustfmt::skip]
pub(super) static GRIDS: [[&str; 31]; 6] = [
    // luminance 2
    [
        ".PP.......................",
        ".PPPP.....................",
        ".PPPPPPP..................",
        ".PPPPPPPPP................",
        ".PPPPPPPPPPP..............",
        ".BBBPPPPPPPPPPR...........",
        ".BBBPPPPPPPPPRRRR.........",
        ".BBBBPPPPPPPPRRRRRRR......",
        ".BBBBBPPPPPPRRRRRRRRRR....",
        "..BBBBBPPPPPRRRRRRRRRRRR..",
        "..BBBBBPPPPRRNRRRRRRRRRRRR",
        "..BBBBKKPPRRNNNNRRRRRRRRRR",
        "..BBBBKKKKRNNNNNNRRRRRRRRR",
        "..BBBBKKKKKKNNNNNNRRRRRRRR",
        "..GGGGGKKKKKNNNNNNNRRRRRRR",
        "..GGGGGGKKKKNNNNNNNNNNNNN.",
        "..GGGGGGGKKKNNNNNNNNNNNN..",
        "...GGGGGGGGGGNNNNNNNNNN...",
        "...GGGGGGGGGGNNNNNNNNN....",
        "...GGGGGGGGGGGNNNNNNN.....",
        "...GGGGGGGGGGGGNNNNN......",
        "...GGGGGGGGGGGGGNNN.......",
        "...GGGGGGGGGGGGGGN........",
        "...GGGGGGGGGGGGGG.........",
        "...GGGGGGGGGGGGG..........",
        "...GGGGGGGGGGGG...........",
        "....GGGGGGGGGG............",
        "....GGGGGGGGG.............",
        "....GGGGGGGG..............",
        "....GGGGGGGG..............",
        "....GGGGGG................",
    ],
    // luminance 5
    [
        "..........................",
        ".PPP......................",
        ".PPPPP....................",
        ".BPPPPPP..................",
        "..BPPPPPPP................",
        "..BBPPPPPPPP..............",
        "..BBPPPPPPPPPR............",
        "..BBBPPPPPPPPRRR..........",
        "...BBBPPPPPPRRRRRR........",
        "...BBBBPPPPPRRRRRRRR......",
        "...BBBBPPPPRRRRRRRRRRR....",
        "...BBBBBPPRRRRRRRRRRRRRR..",
        "...BBBBAAARRRRRRRRRRRRRRRR",
        "....BBBAAAARRRRRRRRRRRRRRR",
        "....GGGAAAAARRRRRRRRRRRRNN",
        "....GGGGAAAANNNNNNNNNNNNN.",
        "....GGGGGGGGNNNNNNNNNNNN..",
        "....GGGGGGGGGNNNNNNNNNN...",
        ".....GGGGGGGGNNNNNNNNN....",
        ".....GGGGGGGGGNNNNNNN.....",
        ".....GGGGGGGGGGNNNNN......",
        ".....GGGGGGGGGGGNNN.......",
        "......GGGGGGGGGGGN........",
        "......GGGGGGGGGGG.........",
        "......GGGGGGGGGG..........",
        "......GGGGGGGGG...........",
        "......GGGGGGGG............",
        ".......GGGGGG.............",
        ".......GGGGG..............",
        ".......GGGGG..............",
        ".......GGG................",
    ],
    // luminance 10
    [
        "..........................",
        "..........................",
        "..........................",
        "..PPPPP...................",
        "..BPPPPPP.................",
        "..BBPPPPPPP...............",
        "..BBPPPPPPPPP.............",
        "...BBPPPPPPPPRR...........",
        "...BBBPPPPPPRRRRR.........",
        "...BBBBPPPPPRRRRRRR.......",
        "...BBBBPPPPRRRRRRRRRR.....",
        "....BBBBPPRRRRRRRRRRRRR...",
        "....BBBAAPRRRRRRRRRRRRRRR.",
        "....BBBAAAARRRRRRRRRRRRRRR",
        "....GGGGAAARRRRRRRRRRRRRNN",
        ".....GGGGAANNNNNNNNNNNNNN.",
        ".....GGGGGGGNNNNNNNNNNNN..",
        ".....GGGGGGGGNNNNNNNNNN...",
        ".....GGGGGGGGNNNNNNNNN....",
        "......GGGGGGGGNNNNNNN.....",
        "......GGGGGGGGGNNNNN......",
        "......GGGGGGGGGGNNN.......",
        "......GGGGGGGGGGGN........",
        ".......GGGGGGGGGG.........",
        ".......GGGGGGGGG..........",
        ".......GGGGGGG............",
        ".......GGGGGG.............",
        "........GGGG..............",
        "........GGG...............",
        "........GG................",
        "........G.................",
    ],
    // luminance 20
    [
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        ".......PPP................",
        "...BBPPPPPI...............",
        "...BBBPPPPII..............",
        "...BBBBPPPIII.............",
        "....BBBPPPIIIR............",
        "....BBBBPPIIRRRR..........",
        "....BBBAAIIIIRRRR.........",
        "....BBBAAAIIIIRRRR........",
        ".....GGGAAAIIIRRRRR.......",
        ".....GGGGAAOOOOOOOOO......",
        ".....GGGGGGYYOOOOOOOO.....",
        ".....GGGGGGYYYOOOOOOOO....",
        "......GGGGGGYYYYOOOOO.....",
        "......GGGGGGGYYYYYYO......",
        "......GGGGGGGYYYYYY.......",
        "......GGGGGGGGYYY.........",
        ".......GGGGGGGYY..........",
        ".......GGGGGGGY...........",
        ".......GGGGGGG............",
        ".......GGGGGG.............",
        "........GGG...............",
        "........GG................",
        "........G.................",
        "..........................",
        "..........................",
    ],
    // luminance 30
    [
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        ".......III................",
        "....BBBIIII...............",
        "....BBBBIIII..............",
        "....BBBAAIIII.............",
        "....BBBAAAIII.............",
        ".....GGGAAAIII............",
        ".....GGGGAAOOOO...........",
        ".....GGGGGGYYOOO..........",
        "......GGGGGYYYOOO.........",
        "......GGGGGGYYYYO.........",
        "......GGGGGGGYYYYY........",
        "......GGGGGGGYYYYY........",
        ".......GGGGGGGYYY.........",
        ".......GGGGGGGYY..........",
        ".......GGGGGGGY...........",
        ".......GGGGGG.............",
        "........GGGG..............",
        "........GGG...............",
        "........GG................",
        "..........................",
        "..........................",
        "..........................",
    ],
    // luminance 40
    [
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        "..........................",
        ".......BII................",
        "....BBBBWI................",
        "....BBBWWWI...............",
        ".....GGGWWWI..............",
        ".....GGGGGYII.............",
        ".....GGGGGGYY.............",
        "......GGGGGYYY............",
        "......GGGGGGYYY...........",
        "......GGGGGGGYY...........",
        "......GGGGGGGYYY..........",
        ".......GGGGGGGYYY.........",
        ".......GGGGGGGYY..........",
        ".......GGGGGGG............",
        ".......GGGGGG.............",
        "........GGGG..............",
        "........GGG...............",
        "........G.................",
        "..........................",
        "..........................",
        "..........................",
    ],
];
