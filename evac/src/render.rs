//! Colored-cell rendering of an annotated floor.

use crossterm::style::{Color, Stylize};
use egress_core::Point;
use egress_paths::EscapePlan;

#[derive(Clone, Copy)]
enum Mark {
    Free,
    Blocked,
    SafeRoute,
    FastRoute,
    Threat,
    Start,
    Exit,
}

impl Mark {
    fn color(self) -> Color {
        match self {
            Self::Free => Color::Grey,
            Self::Blocked => Color::Black,
            Self::SafeRoute => Color::Magenta,
            Self::FastRoute => Color::DarkYellow,
            Self::Threat => Color::Red,
            Self::Start => Color::Blue,
            Self::Exit => Color::Green,
        }
    }
}

/// Print the floor as colored cells, two columns per cell.
///
/// Where routes overlap, the fast route paints over the safe one; threats,
/// the start and the exits paint over both.
pub fn draw(plan: &EscapePlan, threats: &[Point], start: Point) {
    let size = plan.floor.size();
    let mut marks = vec![Mark::Free; (size * size) as usize];
    let mut set = |p: Point, m: Mark| marks[(p.y * size + p.x) as usize] = m;

    for p in plan.floor.bounds() {
        if !plan.floor.is_free(p) {
            set(p, Mark::Blocked);
        }
    }
    if let Some(route) = &plan.safe_route {
        for p in plan.graph.route_points(route) {
            set(p, Mark::SafeRoute);
        }
    }
    if let Some(route) = &plan.fast_route {
        for p in plan.graph.route_points(route) {
            set(p, Mark::FastRoute);
        }
    }
    for &t in threats {
        if plan.floor.contains(t) {
            set(t, Mark::Threat);
        }
    }
    set(start, Mark::Start);
    for &e in plan.graph.exits() {
        set(e, Mark::Exit);
    }

    for y in 0..size {
        for x in 0..size {
            let mark = marks[(y * size + x) as usize];
            print!("{}", "  ".on(mark.color()));
        }
        println!();
    }
    println!(
        "{} blocked  {} threat  {} start  {} exit  {} safe route  {} fast route",
        "  ".on(Color::Black),
        "  ".on(Color::Red),
        "  ".on(Color::Blue),
        "  ".on(Color::Green),
        "  ".on(Color::Magenta),
        "  ".on(Color::DarkYellow),
    );
}
