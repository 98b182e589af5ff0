//! Built-in 6x6 glyph patterns for `!` (0x21) through `~` (0x7e).
//!
//! Each pattern starts and ends with a newline; the rows in between use
//! `l` for an opaque (black) dot and a space for an empty one.

pub const TEXT_PATTERNS: [&str; 94] = [
    // !
    "
  l
  l
  l

  l
",
    // "
    "
 l l
 l l



",
    // #
    "
 l l
lllll
 l l
lllll
 l l
",
    // $
    "
 lll
l l
 lll
  l l
 lll
",
    // %
    "
l   l
l  l
  l
 l  l
l   l
",
    // &
    "
 l
l l
 ll l
l  l
 ll l
",
    // '
    "
  l
  l



",
    // (
    "
   l
  l
  l
  l
   l
",
    // )
    "
 l
  l
  l
  l
 l
",
    // *
    "
  l
l l l
 lll
l l l
  l
",
    // +
    "
  l
  l
lllll
  l
  l
",
    // ,
    "



  l
 l
",
    // -
    "


lllll


",
    // .
    "




  l
",
    // /
    "
    l
   l
  l
 l
l
",
    // 0
    "
 lll
l  ll
l l l
ll  l
 lll
",
    // 1
    "
 ll
l l
  l
  l
lllll
",
    // 2
    "
 lll
l   l
  ll
 l
lllll
",
    // 3
    "
 lll
l   l
  ll
l   l
 lll
",
    // 4
    "
  ll
 l l
l  l
lllll
   l
",
    // 5
    "
lllll
l
llll
    l
llll
",
    // 6
    "
 lll
l
llll
l   l
 lll
",
    // 7
    "
lllll
l   l
   l
  l
 l
",
    // 8
    "
 lll
l   l
 lll
l   l
 lll
",
    // 9
    "
 lll
l   l
 llll
    l
 lll
",
    // :
    "

  l

  l

",
    // ;
    "

  l

  l
 l
",
    // <
    "
   ll
 ll
l
 ll
   ll
",
    // =
    "

lllll

lllll

",
    // >
    "
ll
  ll
    l
  ll
ll
",
    // ?
    "
 lll
l   l
  ll

  l
",
    // @
    "
 lll
l   l
l lll
l
 lll
",
    // A
    "
 lll
l   l
lllll
l   l
l   l
",
    // B
    "
llll
l   l
llll
l   l
llll
",
    // C
    "
 lll
l   l
l
l   l
 lll
",
    // D
    "
llll
l   l
l   l
l   l
llll
",
    // E
    "
lllll
l
llll
l
lllll
",
    // F
    "
lllll
l
llll
l
l
",
    // G
    "
 lll
l
l  ll
l   l
 llll
",
    // H
    "
l   l
l   l
lllll
l   l
l   l
",
    // I
    "
lllll
  l
  l
  l
lllll
",
    // J
    "
 llll
   l
   l
l  l
 ll
",
    // K
    "
l   l
l  l
lll
l  l
l   l
",
    // L
    "
l
l
l
l
lllll
",
    // M
    "
l   l
ll ll
l l l
l   l
l   l
",
    // N
    "
l   l
ll  l
l l l
l  ll
l   l
",
    // O
    "
 lll
l   l
l   l
l   l
 lll
",
    // P
    "
llll
l   l
llll
l
l
",
    // Q
    "
 lll
l   l
l   l
l  ll
 llll
",
    // R
    "
llll
l   l
llll
l   l
l   l
",
    // S
    "
 llll
l
 lll
    l
llll
",
    // T
    "
lllll
  l
  l
  l
  l
",
    // U
    "
l   l
l   l
l   l
l   l
 lll
",
    // V
    "
l   l
l   l
 l l
 l l
  l
",
    // W
    "
l   l
l   l
l l l
l l l
 l l
",
    // X
    "
l   l
 l l
  l
 l l
l   l
",
    // Y
    "
l   l
 l l
  l
  l
  l
",
    // Z
    "
lllll
   l
  l
 l
lllll
",
    // [
    "
  ll
  l
  l
  l
  ll
",
    // \
    "
l
 l
  l
   l
    l
",
    // ]
    "
 ll
  l
  l
  l
 ll
",
    // ^
    "
  l
 l l



",
    // _
    "




lllll
",
    // `
    "
 l
  l



",
    // a
    "
 ll
   l
 lll
l  l
 ll
",
    // b
    "
l
l
lll
l  l
lll
",
    // c
    "

 ll
l  
l
 ll
",
    // d
    "
   l
   l
 lll
l  l
 lll
",
    // e
    "
 ll
l  l
lll
l
 ll
",
    // f
    "
   l
  l 
 lll
  l
  l
",
    // g
    "
 lll
l  l
 lll
   l
 ll
",
    // h
    "
l
l
lll
l  l
l  l
",
    // i
    "
  l

  l
  l
  l
",
    // j
    "
   l

   l
   l
 ll
",
    // k
    "
l
l
l l
ll
l l
",
    // l
    "
 ll
  l
  l
  l
 lll
",
    // m
    "

ll l
l l l
l l l
l l l
",
    // n
    "

l ll
ll  l
l   l
l   l
",
    // o
    "

 ll
l  l
l  l
 ll
",
    // p
    "

lll
l  l
lll
l
",
    // q
    "

 lll
l  l
 lll
   l
",
    // r
    "

l ll
ll
l
l
",
    // s
    "
 ll
l
 ll  
   l
 ll
",
    // t
    "
 l
lll
 l
 l
  l
",
    // u
    "

l  l
l  l
l  l
 ll
",
    // v
    "

l  l
l  l
 ll
 ll
",
    // w
    "

l l l
l l l
l l l
 l l
",
    // x
    "

l  l
 ll
 ll
l  l
",
    // y
    "

l  l
 ll
 l
l
",
    // z
    "

llll
  l
 l
llll
",
    // {
    "
  ll
  l
 l
  l
  ll
",
    // |
    "
  l
  l
  l
  l
  l
",
    // }
    "
 ll
  l
   l
  l
 ll
",
    // ~
    "

 l
l l l
   l

",
];
