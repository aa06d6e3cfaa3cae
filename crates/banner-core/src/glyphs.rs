//! Built-in block font.
//!
//! Capital letters, digits and printable ASCII punctuation, drawn with `#`
//! on a space background. Every glyph is [`HEIGHT`] rows tall; widths vary
//! from glyph to glyph.
//!
//! ```text
//!    #     ######
//!   # #    #     #
//!  #   #   #     #
//! #     #  ######
//! #######  #     #
//! #     #  #     #
//! #     #  ######
//! ```

/// Row count shared by every built-in glyph.
pub const HEIGHT: usize = 7;

/// Ink character used by the built-in glyphs.
pub const INK: char = '#';

/// `(character, rows)` pairs, in the order they were drawn.
#[rustfmt::skip]
pub(crate) const STANDARD: &[(char, &[&str])] = &[
    ('A', &[
        "   #   ",
        "  # #  ",
        " #   # ",
        "#     #",
        "#######",
        "#     #",
        "#     #",
    ]),
    ('B', &[
        "###### ",
        "#     #",
        "#     #",
        "###### ",
        "#     #",
        "#     #",
        "###### ",
    ]),
    ('C', &[
        " ##### ",
        "#     #",
        "#      ",
        "#      ",
        "#      ",
        "#     #",
        " ##### ",
    ]),
    ('D', &[
        "###### ",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "###### ",
    ]),
    ('E', &[
        "#######",
        "#      ",
        "#      ",
        "#####  ",
        "#      ",
        "#      ",
        "#######",
    ]),
    ('F', &[
        "#######",
        "#      ",
        "#      ",
        "#####  ",
        "#      ",
        "#      ",
        "#      ",
    ]),
    ('G', &[
        " ##### ",
        "#     #",
        "#      ",
        "#  ####",
        "#     #",
        "#     #",
        " ##### ",
    ]),
    ('H', &[
        "#     #",
        "#     #",
        "#     #",
        "#######",
        "#     #",
        "#     #",
        "#     #",
    ]),
    ('I', &[
        "###",
        " # ",
        " # ",
        " # ",
        " # ",
        " # ",
        "###",
    ]),
    ('J', &[
        "      #",
        "      #",
        "      #",
        "      #",
        "#     #",
        "#     #",
        " ##### ",
    ]),
    ('K', &[
        "#    #",
        "#   # ",
        "#  #  ",
        "###   ",
        "#  #  ",
        "#   # ",
        "#    #",
    ]),
    ('L', &[
        "#      ",
        "#      ",
        "#      ",
        "#      ",
        "#      ",
        "#      ",
        "#######",
    ]),
    ('M', &[
        "#     #",
        "##   ##",
        "# # # #",
        "#  #  #",
        "#     #",
        "#     #",
        "#     #",
    ]),
    ('N', &[
        "#     #",
        "##    #",
        "# #   #",
        "#  #  #",
        "#   # #",
        "#    ##",
        "#     #",
    ]),
    ('O', &[
        "#######",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#######",
    ]),
    ('P', &[
        "###### ",
        "#     #",
        "#     #",
        "###### ",
        "#      ",
        "#      ",
        "#      ",
    ]),
    ('Q', &[
        " ##### ",
        "#     #",
        "#     #",
        "#     #",
        "#   # #",
        "#    # ",
        " #### #",
    ]),
    ('R', &[
        "###### ",
        "#     #",
        "#     #",
        "###### ",
        "#   #  ",
        "#    # ",
        "#     #",
    ]),
    ('S', &[
        " ##### ",
        "#     #",
        "#      ",
        " ##### ",
        "      #",
        "#     #",
        " ##### ",
    ]),
    ('T', &[
        "#######",
        "   #   ",
        "   #   ",
        "   #   ",
        "   #   ",
        "   #   ",
        "   #   ",
    ]),
    ('U', &[
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        " ##### ",
    ]),
    ('V', &[
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        " #   # ",
        "  # #  ",
        "   #   ",
    ]),
    ('W', &[
        "#     #",
        "#  #  #",
        "#  #  #",
        "#  #  #",
        "#  #  #",
        "#  #  #",
        " ## ## ",
    ]),
    ('X', &[
        "#     #",
        " #   # ",
        "  # #  ",
        "   #   ",
        "  # #  ",
        " #   # ",
        "#     #",
    ]),
    ('Y', &[
        "#     #",
        " #   # ",
        "  # #  ",
        "   #   ",
        "   #   ",
        "   #   ",
        "   #   ",
    ]),
    ('Z', &[
        "#######",
        "     # ",
        "    #  ",
        "  #    ",
        " #     ",
        "#      ",
        "#######",
    ]),
    ('0', &[
        " #### ",
        "#   ##",
        "#  # #",
        "# #  #",
        "##   #",
        "#    #",
        " #### ",
    ]),
    ('1', &[
        "  #  ",
        " ##  ",
        "# #  ",
        "  #  ",
        "  #  ",
        "  #  ",
        "#####",
    ]),
    ('2', &[
        " ### ",
        "#   #",
        "#   #",
        "   # ",
        "  #  ",
        " #   ",
        "#####",
    ]),
    ('3', &[
        " ### ",
        "#   #",
        "    #",
        " ### ",
        "    #",
        "#   #",
        " ### ",
    ]),
    ('4', &[
        "#   #",
        "#   #",
        "#   #",
        "#####",
        "    #",
        "    #",
        "    #",
    ]),
    ('5', &[
        "#####",
        "#    ",
        "#    ",
        "#####",
        "    #",
        "    #",
        "#####",
    ]),
    ('6', &[
        " ### ",
        "#   #",
        "#    ",
        "#### ",
        "#   #",
        "#   #",
        " ### ",
    ]),
    ('7', &[
        "#####",
        "    #",
        "   # ",
        "  #  ",
        " #   ",
        " #   ",
        " #   ",
    ]),
    ('8', &[
        " ### ",
        "#   #",
        "#   #",
        " ### ",
        "#   #",
        "#   #",
        " ### ",
    ]),
    ('9', &[
        " ### ",
        "#   #",
        "#   #",
        " ### ",
        "   # ",
        "  #  ",
        "#    ",
    ]),
    ('#', &[
        "  # #  ",
        "  # #  ",
        "#######",
        "  # #  ",
        "#######",
        "  # #  ",
        "  # #  ",
    ]),
    ('~', &[
        " ##    ",
        "#  #  #",
        "    ## ",
        "       ",
        "       ",
        "       ",
        "       ",
    ]),
    ('!', &[
        " ### ",
        " ### ",
        " ### ",
        "  #  ",
        "     ",
        " ### ",
        " ### ",
    ]),
    ('@', &[
        " ##### ",
        "#     #",
        "# ### #",
        "# ### #",
        "# #### ",
        "#      ",
        " ##### ",
    ]),
    ('$', &[
        " ##### ",
        "#  #  #",
        "#  #   ",
        " ##### ",
        "   #  #",
        "#  #  #",
        " ##### ",
    ]),
    ('%', &[
        "###   #",
        "# #  # ",
        "### #  ",
        "   #   ",
        "  # ###",
        " #  # #",
        "#   ###",
    ]),
    ('^', &[
        "  #  ",
        " # # ",
        "#   #",
        "     ",
        "     ",
        "     ",
        "     ",
    ]),
    ('&', &[
        "  ##   ",
        " #  #  ",
        "  ##   ",
        " ###   ",
        "#   # #",
        "#    # ",
        " ###  #",
    ]),
    ('*', &[
        "       ",
        " #   # ",
        "  # #  ",
        "#######",
        "  # #  ",
        " #   # ",
        "       ",
    ]),
    (')', &[
        "##  ",
        "  # ",
        "   #",
        "   #",
        "   #",
        "  # ",
        "##  ",
    ]),
    ('(', &[
        "  ##",
        " #  ",
        "#   ",
        "#   ",
        "#   ",
        " #  ",
        "  ##",
    ]),
    ('_', &[
        "     ",
        "     ",
        "     ",
        "     ",
        "     ",
        "     ",
        "#####",
    ]),
    ('+', &[
        "       ",
        "   #   ",
        "   #   ",
        " ##### ",
        "   #   ",
        "   #   ",
        "       ",
    ]),
    ('=', &[
        "       ",
        "       ",
        " ##### ",
        "       ",
        " ##### ",
        "       ",
        "       ",
    ]),
    ('}', &[
        "###  ",
        "   # ",
        "   # ",
        "   ##",
        "   # ",
        "   # ",
        "###  ",
    ]),
    ('{', &[
        "  ###",
        " #   ",
        " #   ",
        "##   ",
        " #   ",
        " #   ",
        "  ###",
    ]),
    (']', &[
        "#####",
        "    #",
        "    #",
        "    #",
        "    #",
        "    #",
        "#####",
    ]),
    ('[', &[
        "#####",
        "#    ",
        "#    ",
        "#    ",
        "#    ",
        "#    ",
        "#####",
    ]),
    ('|', &[
        " # ",
        " # ",
        " # ",
        "   ",
        " # ",
        " # ",
        " # ",
    ]),
    ('\\', &[
        "#      ",
        " #     ",
        "  #    ",
        "   #   ",
        "    #  ",
        "     # ",
        "      #",
    ]),
    (':', &[
        " ### ",
        " ### ",
        " ### ",
        "     ",
        " ### ",
        " ### ",
        " ### ",
    ]),
    (';', &[
        " ### ",
        " ### ",
        "     ",
        " ### ",
        " ### ",
        "  #  ",
        " #   ",
    ]),
    ('"', &[
        " ### ### ",
        " ### ### ",
        "  #   #  ",
        "         ",
        "         ",
        "         ",
        "         ",
    ]),
    ('\'', &[
        " ### ",
        " ### ",
        "  #  ",
        " #   ",
        "     ",
        "     ",
        "     ",
    ]),
    ('`', &[
        " ### ",
        " ### ",
        "  #  ",
        "   # ",
        "     ",
        "     ",
        "     ",
    ]),
    ('>', &[
        " #    ",
        "  #   ",
        "   #  ",
        "    # ",
        "   #  ",
        "  #   ",
        " #    ",
    ]),
    ('<', &[
        "    # ",
        "   #  ",
        "  #   ",
        " #    ",
        "  #   ",
        "   #  ",
        "    # ",
    ]),
    ('.', &[
        "     ",
        "     ",
        "     ",
        "     ",
        " ### ",
        " ### ",
        " ### ",
    ]),
    (',', &[
        "     ",
        "     ",
        "     ",
        " ### ",
        " ### ",
        "  #  ",
        " #   ",
    ]),
    ('?', &[
        " ##### ",
        "#     #",
        "      #",
        "   ### ",
        "   #   ",
        "       ",
        "   #   ",
    ]),
    ('/', &[
        "      #",
        "     # ",
        "    #  ",
        "   #   ",
        "  #    ",
        " #     ",
        "#      ",
    ]),
    ('-', &[
        "       ",
        "       ",
        "       ",
        "#######",
        "       ",
        "       ",
        "       ",
    ]),
];
