// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::util::pad_to_width;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Column-aligned rows, one per item.
///
/// With `widths` set, columns are padded to those widths instead of the
/// widest cell, so several tables can line up.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    header: bool,
    widths: Option<Vec<usize>>,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            header: false,
            widths: None,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_widths(mut self, widths: Vec<usize>) -> Self {
        self.widths = Some(widths);
        self
    }

    /// The display width of every column, headers included when shown.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = match self.header {
            true => self.columns.iter().map(|c| c.name().width()).collect(),
            false => vec![0; self.columns.len()],
        };
        for item in self.data {
            for (w, col) in widths.iter_mut().zip(self.columns) {
                *w = (*w).max(col.format(item).width());
            }
        }
        widths
    }

    fn write_row<'b>(
        &self,
        f: &mut fmt::Formatter<'_>,
        widths: &[usize],
        cells: impl Iterator<Item = (Cow<'b, str>, Option<Color>)>,
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, ((cell, color), col)) in cells.zip(self.columns).enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            let cell = match (i == last, col.padding_direction()) {
                (true, PaddingDirection::Left) => cell.into_owned(), // no trailing spaces
                (_, PaddingDirection::Left) => pad_to_width(&cell, width, true),
                (_, PaddingDirection::Right) => pad_to_width(&cell, width, false),
            };

            match color {
                Some(color) => write!(f, "{}", cell.color(color))?,
                None => write!(f, "{cell}")?,
            }
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        Ok(())
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths.clone().unwrap_or_else(|| self.column_widths());

        let mut rows = 0;
        if self.header {
            let names = self.columns.iter().map(|c| (c.name(), None));
            self.write_row(f, &widths, names)?;
            rows += 1;
        }

        for item in self.data {
            if rows > 0 {
                writeln!(f)?;
            }
            let cells = self
                .columns
                .iter()
                .map(|c| (c.format(item), c.get_color(item)));
            self.write_row(f, &widths, cells)?;
            rows += 1;
        }
        Ok(())
    }
}
