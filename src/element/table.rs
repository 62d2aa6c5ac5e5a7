use super::Element;
use crate::style::{CellStyle, RowStyle, StyleArg, StyleDefinition, StyleRef, TableStyle};

/// A table of rows and cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    style: Option<StyleRef<TableStyle>>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> Option<&StyleRef<TableStyle>> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: impl Into<StyleArg<TableStyle>>) -> &mut Self {
        self.style = Some(style.into().into_ref());
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::default());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Add a cell to the last row, starting a row when there is none.
    pub fn add_cell(&mut self) -> &mut Cell {
        if self.rows.is_empty() {
            self.rows.push(Row::default());
        }
        let last = self.rows.len() - 1;
        self.rows[last].add_cell()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell widths of the widest row, used for the table grid.
    pub fn grid_widths(&self) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .max_by_key(|row| row.cells.len())
            .map(|row| row.cells.iter().map(Cell::width).collect())
            .unwrap_or_default()
    }
}

/// A table row.
#[derive(Debug, Clone, Default)]
pub struct Row {
    height: Option<f64>,
    style: RowStyle,
    cells: Vec<Cell>,
}

impl Row {
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn set_height(&mut self, height: f64) -> &mut Self {
        self.height = Some(height);
        self
    }

    pub fn style(&self) -> &RowStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: impl Into<StyleDefinition<RowStyle>>) -> &mut Self {
        self.style = style.into().build();
        self
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn add_cell(&mut self) -> &mut Cell {
        self.cells.push(Cell::default());
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }
}

/// A table cell: a container of paragraphs.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    width: Option<f64>,
    style: CellStyle,
    pub(crate) elements: Vec<Element>,
}

impl Cell {
    /// Width in twips; the cell style's width when none was set on the cell.
    pub fn width(&self) -> Option<f64> {
        self.width.or_else(|| self.style.width())
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn style(&self) -> &CellStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: impl Into<StyleDefinition<CellStyle>>) -> &mut Self {
        self.style = style.into().build();
        self
    }
}
