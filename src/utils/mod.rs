/*!
# Utilities

Low-level storage helpers used by the representations:
- [`IncidenceBuffer`](self::incidence_buffer::IncidenceBuffer): the flat column arena behind
  [`IncidenceMatrixGraph`](crate::repr::IncidenceMatrixGraph).

You probably do not need to interact with this module directly.
*/

pub mod incidence_buffer;
