//! Text rendering of a Gantt chart.

use scheduler::GanttBlock;

/// Charts longer than this are scaled down to fit.
pub const MAX_COLUMNS: usize = 80;

/// Renders `blocks` as a bar row and a time axis row.
///
/// Each block is as wide as its duration (scaled when the makespan exceeds
/// [`MAX_COLUMNS`]) but never narrower than its label. Every boundary time is
/// printed under its `|`, pushed right when the previous time is too long.
///
/// ```text
/// | P1  |P2 |   P3   |
/// 0     5   8        16
/// ```
pub fn render_gantt(blocks: &[GanttBlock]) -> String {
    let Some(last) = blocks.last() else {
        return String::from("(empty)\n");
    };
    let makespan = last.end;

    // positions are counted in chars, labels may hold any pid
    let mut bar = String::from("|");
    let mut bar_width = 1;
    let mut boundaries = vec![(0, blocks[0].start)];
    for block in blocks {
        let label = block.occupant.to_string();
        let label_width = label.chars().count();
        let width = columns(block.duration(), makespan).max(label_width);
        let left = (width - label_width) / 2;
        let right = width - label_width - left;

        bar.push_str(&" ".repeat(left));
        bar.push_str(&label);
        bar.push_str(&" ".repeat(right));
        bar_width += width;
        boundaries.push((bar_width, block.end));
        bar.push('|');
        bar_width += 1;
    }

    let mut axis = String::new();
    for (position, time) in boundaries {
        if axis.len() < position {
            axis.push_str(&" ".repeat(position - axis.len()));
        } else if !axis.is_empty() {
            axis.push(' ');
        }
        axis.push_str(&time.to_string());
    }

    format!("{}\n{}\n", bar, axis)
}

fn columns(duration: usize, makespan: usize) -> usize {
    if makespan <= MAX_COLUMNS {
        duration
    } else {
        // at most MAX_COLUMNS since duration <= makespan
        (duration as u128 * MAX_COLUMNS as u128 / makespan as u128) as usize
    }
}
