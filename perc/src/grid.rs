use crate::{
    error::{Error, Result},
    union_find::UnionFind,
};

////////////////////////////////////////////////////////////////////////////////

/// Connectivity status of a single site.
///
/// Statuses are ordered by precedence: `Blocked < Open < Bottom < Top <
/// TopAndBottom`. Merging a component rooted at `Top` with one rooted at
/// `Bottom` bridges the two and yields `TopAndBottom`; any other merge keeps
/// the higher precedence. A site's status only ever grows in precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Status {
    Blocked,
    Open,
    Bottom,
    Top,
    TopAndBottom,
}

impl Status {
    fn merge(self, other: Status) -> Status {
        match (self, other) {
            (Status::Top, Status::Bottom) | (Status::Bottom, Status::Top) => Status::TopAndBottom,
            _ => self.max(other),
        }
    }

    fn reaches_top(self) -> bool {
        matches!(self, Status::Top | Status::TopAndBottom)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// An n-by-n grid of sites for percolation simulation.
///
/// Sites start blocked and are opened one at a time; the grid percolates
/// once a path of open sites connects the top row to the bottom row.
/// Coordinates are 1-indexed: `row` and `col` both range over `[1, n]`.
///
/// Top and bottom reachability is stored as a [`Status`] on the canonical
/// root of each union-find component rather than as unions with virtual
/// sentinel sites. A bottom-connected component therefore can never be
/// mistaken for a top-connected one (the classic "backwash" bug of the
/// two-sentinel scheme).
#[derive(Debug)]
pub struct Percolation {
    size: usize,
    grid: Vec<Status>,
    uf: UnionFind,
    num_open: usize,
    percolates: bool,
}

impl Percolation {
    /// Creates an `n`-by-`n` grid with every site blocked.
    ///
    /// Returns [`Error::InvalidSize`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self {
            size: n,
            grid: vec![Status::Blocked; n * n],
            uf: UnionFind::new(n * n),
            num_open: 0,
            percolates: false,
        })
    }

    /// Opens the site at (`row`, `col`), connecting it with its open
    /// orthogonal neighbours. Opening an already-open site changes nothing.
    ///
    /// Returns [`Error::SiteOutOfRange`] if either coordinate falls outside
    /// `[1, n]`; no state is touched on an invalid call.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;
        let index = self.index(row, col);
        if self.grid[index] != Status::Blocked {
            return Ok(());
        }

        let mut status = match (row == 1, row == self.size) {
            (true, true) => Status::TopAndBottom,
            (true, false) => Status::Top,
            (false, true) => Status::Bottom,
            (false, false) => Status::Open,
        };
        self.grid[index] = status;

        for (n_row, n_col) in neighbours(self.size, row, col) {
            let n_index = self.index(n_row, n_col);
            if self.grid[n_index] == Status::Blocked {
                continue;
            }
            let n_root = self.uf.find(n_index);
            status = status.merge(self.grid[n_root]);
            self.uf.union(index, n_index);
        }

        if status == Status::TopAndBottom {
            self.percolates = true;
        }
        // the root carries the authoritative status for the whole component
        let root = self.uf.find(index);
        self.grid[root] = status;
        self.num_open += 1;
        Ok(())
    }

    /// Returns `true` if the site at (`row`, `col`) has been opened.
    ///
    /// Returns [`Error::SiteOutOfRange`] on out-of-range coordinates.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.grid[self.index(row, col)] != Status::Blocked)
    }

    /// Returns `true` if the site at (`row`, `col`) is connected to the top
    /// row through open sites.
    ///
    /// When the answer has to come from the component root, it is copied
    /// back onto the queried site so later queries on that site resolve
    /// without the root lookup. The write-back never changes an answer,
    /// only its cost.
    ///
    /// Returns [`Error::SiteOutOfRange`] on out-of-range coordinates.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        let index = self.index(row, col);
        if self.grid[index].reaches_top() {
            return Ok(true);
        }
        let root = self.uf.find(index);
        if self.grid[root].reaches_top() {
            self.grid[index] = self.grid[root];
        }
        Ok(self.grid[index].reaches_top())
    }

    /// Returns the number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.num_open
    }

    /// Returns `true` if the grid percolates. The flag is sticky: once set
    /// it never resets.
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row == 0 || row > self.size || col == 0 || col > self.size {
            return Err(Error::SiteOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    // caller must validate first
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + (col - 1)
    }
}

/// In-bounds orthogonal neighbours of (`row`, `col`), 1-indexed.
fn neighbours(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let row = row as isize + dr;
            let col = col as isize + dc;

            if row >= 1 && row <= size as isize && col >= 1 && col <= size as isize {
                return Some((row as usize, col as usize));
            }
            None
        })
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_grid_is_fully_blocked() {
        let grid = Percolation::new(3).unwrap();
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(!grid.percolates());
        for row in 1..=3 {
            for col in 1..=3 {
                assert!(!grid.is_open(row, col).unwrap());
            }
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Percolation::new(0).unwrap_err(), Error::InvalidSize);
    }

    #[test]
    fn open_is_idempotent() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        assert_eq!(grid.number_of_open_sites(), 1);
        grid.open(2, 2).unwrap();
        assert_eq!(grid.number_of_open_sites(), 1);
        assert!(grid.is_open(2, 2).unwrap());
    }

    #[test]
    fn out_of_range_coordinates_error_without_mutation() {
        let mut grid = Percolation::new(3).unwrap();
        for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (4, 4)] {
            assert!(grid.open(row, col).is_err());
            assert!(grid.is_open(row, col).is_err());
            assert!(grid.is_full(row, col).is_err());
        }
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(!grid.percolates());
    }

    #[test]
    fn single_site_grid_percolates_at_once() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(1, 1).unwrap());
        assert_eq!(grid.number_of_open_sites(), 1);
    }

    #[test]
    fn vertical_column_percolates() {
        let mut grid = Percolation::new(4).unwrap();
        for row in 1..=4 {
            assert!(!grid.percolates());
            grid.open(row, 2).unwrap();
        }
        assert!(grid.percolates());
        for row in 1..=4 {
            assert!(grid.is_full(row, 2).unwrap());
        }
    }

    #[test]
    fn percolation_flag_is_sticky() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        assert!(grid.percolates());
        grid.open(1, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn disconnected_columns_do_not_percolate() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(3, 3).unwrap();
        grid.open(2, 2).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.is_full(3, 3).unwrap());
        assert!(!grid.is_full(2, 2).unwrap());
        assert!(grid.is_full(1, 1).unwrap());
    }

    #[test]
    fn bottom_component_stays_dry_after_percolation() {
        // Column 1 percolates; column 4 touches the bottom but is cut at
        // row 3, so nothing in it may report as full.
        let mut grid = Percolation::new(4).unwrap();
        grid.open(4, 1).unwrap();
        grid.open(3, 1).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(1, 4).unwrap();
        grid.open(2, 4).unwrap();
        grid.open(4, 4).unwrap();

        assert!(grid.percolates());
        assert!(grid.is_full(2, 4).unwrap());
        assert!(!grid.is_full(4, 4).unwrap());
    }

    #[test]
    fn bridging_top_and_bottom_components_percolates() {
        // Two separate components, one touching the top and one the bottom,
        // joined through a single interior site.
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 2).unwrap();
        grid.open(3, 2).unwrap();
        assert!(!grid.percolates());
        grid.open(2, 2).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(3, 2).unwrap());
    }

    #[test]
    fn fully_open_grid_percolates() {
        for n in 1..=5 {
            let mut grid = Percolation::new(n).unwrap();
            for row in 1..=n {
                for col in 1..=n {
                    grid.open(row, col).unwrap();
                }
            }
            assert!(grid.percolates());
            assert_eq!(grid.number_of_open_sites(), n * n);
        }
    }

    #[test]
    fn is_full_write_back_keeps_answers_stable() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 1).unwrap();
        assert!(!grid.is_full(3, 1).unwrap());
        grid.open(1, 1).unwrap();
        // first query resolves through the root, second through the site
        assert!(grid.is_full(3, 1).unwrap());
        assert!(grid.is_full(3, 1).unwrap());
    }

    #[test]
    fn status_merge_bridges_top_and_bottom() {
        assert_eq!(Status::Top.merge(Status::Bottom), Status::TopAndBottom);
        assert_eq!(Status::Bottom.merge(Status::Top), Status::TopAndBottom);
        assert_eq!(Status::Open.merge(Status::Bottom), Status::Bottom);
        assert_eq!(Status::Top.merge(Status::Open), Status::Top);
        assert_eq!(
            Status::TopAndBottom.merge(Status::Open),
            Status::TopAndBottom
        );
        assert_eq!(Status::Blocked.merge(Status::Open), Status::Open);
    }
}
