use crate::geometry::Rect;
use crate::grid::GridSurface;
use crate::plan::Style;
use std::fmt::Write;

/// Surface a layout is painted onto.
pub trait GridRenderer {
    /// Empty the surface before a new layout is painted.
    fn clear(&mut self);

    fn paint_rect(&mut self, rect: Rect, style: Style, label: Option<&str>);
}

impl GridRenderer for GridSurface {
    fn clear(&mut self) {
        GridSurface::clear(self);
    }

    fn paint_rect(&mut self, rect: Rect, style: Style, _label: Option<&str>) {
        GridSurface::paint_rect(self, rect, style);
    }
}

/// Fill color used for a style when drawing.
pub fn style_color(style: Style) -> &'static str {
    const ALLIANCE_COLORS: [&str; 8] = [
        "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#bfef45",
    ];

    match style {
        Style::CentralStructure => "#ffd700",
        Style::Furnace => "#8b4513",
        Style::MachineGun => "#404040",
        Style::Alliance(alliance) => ALLIANCE_COLORS[alliance.index()],
    }
}

/// Character used for a tile in the text rendering.
pub fn style_glyph(style: Option<Style>) -> char {
    match style {
        None => '.',
        Some(Style::CentralStructure) => '#',
        Some(Style::Furnace) => 'F',
        Some(Style::MachineGun) => 'M',
        Some(Style::Alliance(alliance)) => {
            char::from_digit(alliance.number() as u32, 10).unwrap_or('?')
        }
    }
}

/// One line per grid row, one character per tile.
pub fn render_ascii(grid: &GridSurface) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for (loc, style) in grid.iter() {
        out.push(style_glyph(style));
        if loc.col() as u32 == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

#[derive(Clone, Debug)]
struct SvgRect {
    rect: Rect,
    style: Style,
    label: Option<String>,
}

/// Collects painted rectangles and writes them as an SVG document, one
/// `cell_size` pixel square per tile. Rectangles are clipped to the grid.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    cell_size: u32,
    rects: Vec<SvgRect>,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        SvgRenderer {
            width,
            height,
            cell_size,
            rects: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let cell = self.cell_size as u64;
        let px_width = self.width as u64 * cell;
        let px_height = self.height as u64 * cell;

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{px_width}" height="{px_height}" viewBox="0 0 {px_width} {px_height}">"#
        );
        let _ = writeln!(
            out,
            r##"  <rect width="{px_width}" height="{px_height}" fill="#f4f4f4"/>"##
        );

        for item in &self.rects {
            let Some(rect) = item.rect.clip_to(self.width, self.height) else {
                continue;
            };
            let _ = write!(
                out,
                r#"  <rect class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}">"#,
                item.style.tag(),
                rect.x as u64 * cell,
                rect.y as u64 * cell,
                rect.width as u64 * cell,
                rect.height as u64 * cell,
                style_color(item.style)
            );
            if let Some(label) = &item.label {
                let _ = write!(out, "<title>{}</title>", label);
            }
            let _ = writeln!(out, "</rect>");
        }

        out.push_str("</svg>\n");
        out
    }
}

impl GridRenderer for SvgRenderer {
    fn clear(&mut self) {
        self.rects.clear();
    }

    fn paint_rect(&mut self, rect: Rect, style: Style, label: Option<&str>) {
        self.rects.push(SvgRect {
            rect,
            style,
            label: label.map(str::to_string),
        });
    }
}
