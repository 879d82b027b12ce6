//! Default task: the guidance banner.

use crate::ui;

/// Print the banner pointing at the runnable tasks.
pub fn execute() {
    ui::banner_line("      === PACKWRIGHT ===     ");
    ui::banner_line("Default packwright tasks.");
    ui::banner_line("Run packwright help");
    ui::banner_line("to find out the runnable tasks");
    ui::banner_line("      === PACKWRIGHT ===     ");
}
