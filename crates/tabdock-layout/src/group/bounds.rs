//! Group layout: splitting the main axis among children by weight.

use tabdock_common::Rect;

use crate::metrics::DockMetrics;
use crate::tab::TabContent;

use super::Group;

/// Split `available` pixels into `n` near-equal shares, the remainder going
/// one pixel each to the earliest. Returns the shares and the base share.
pub fn equal_shares(available: i32, n: usize) -> (Vec<i32>, i32) {
    if n == 0 {
        return (Vec::new(), 0);
    }
    let count = n as i32;
    let base = available / count;
    let rem = (available % count) as usize;
    let sizes = (0..n).map(|i| base + i32::from(i < rem)).collect();
    (sizes, base)
}

/// Scale positive `weights` to `available` pixels. Returns the new weights
/// (truncated, but never below 1 so they stay sized) and the final sizes,
/// with the truncation loss handed out one pixel each to the earliest
/// children. Weights already summing to `available` are used as they are.
pub fn proportional_shares(weights: &[i32], available: i32) -> (Vec<i32>, Vec<i32>) {
    let sum: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    if sum == i64::from(available) || sum <= 0 {
        return (weights.to_vec(), weights.to_vec());
    }
    let scaled: Vec<i32> = weights
        .iter()
        .map(|&w| (i64::from(w) * i64::from(available) / sum) as i32)
        .collect();
    let mut diff = available - scaled.iter().sum::<i32>();
    let sizes = scaled
        .iter()
        .map(|&w| {
            let add = i32::from(diff > 0);
            diff -= 1;
            w + add
        })
        .collect();
    let weights = scaled.iter().map(|&w| w.max(1)).collect();
    (weights, sizes)
}

impl<C: TabContent> Group<C> {
    /// Place the group at `rect` and lay its children out along the main
    /// axis, `folder_margin` apart. A single child takes the whole rect.
    /// Weights are left alone when there is no space to share.
    pub fn set_bounds(&mut self, rect: Rect, metrics: &DockMetrics) {
        self.bounds = rect;
        let n = self.children.len();
        if n == 0 {
            return;
        }
        if n == 1 {
            self.children[0].set_bounds(rect, metrics);
            return;
        }

        let orientation = self.orientation;
        let margin = metrics.folder_margin;
        let available = (orientation.extent(rect) - (n as i32 - 1) * margin).max(0);

        let keep_weights = available == 0;
        let sizes = if self.children.iter().any(|c| c.weight() <= 0) {
            let (sizes, base) = equal_shares(available, n);
            if !keep_weights {
                for child in &mut self.children {
                    child.set_weight(base);
                }
            }
            sizes
        } else {
            let weights: Vec<i32> = self.children.iter().map(|c| c.weight()).collect();
            let (weights, sizes) = proportional_shares(&weights, available);
            if !keep_weights {
                for (child, weight) in self.children.iter_mut().zip(weights) {
                    child.set_weight(weight);
                }
            }
            sizes
        };

        let mut offset = orientation.start(rect);
        for (child, size) in self.children.iter_mut().zip(sizes) {
            child.set_bounds(orientation.slice(rect, offset, size), metrics);
            offset += size + margin;
        }
    }

    /// Hide the contents of every folder below this group.
    pub fn hide_contents(&mut self) {
        self.for_each_folder_mut(&mut |f| f.hide_contents());
    }
}
