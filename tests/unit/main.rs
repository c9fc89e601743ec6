//! Unit tests mirroring the `src/` module layout

mod io;
mod overlay;
mod pixel;
