//! Small demonstration driver: lays a justified flex row, resolves a table
//! grid, and walks one float-driven page revisit, logging as it goes.

use folio::{
    director_for, main_axis_positions, FlexDirection, FlexItem, FlexLine, JustifyContent, Margins,
    PageSize, Rect, RootPass, Size,
};

fn main() {
    env_logger::init();

    // A 400pt-wide row with 110pt of slack, centered.
    let director = director_for(FlexDirection::Row);
    let mut line = FlexLine::new(vec![
        FlexItem::new(0, Size::new(120.0, 40.0)),
        FlexItem::new(1, Size::new(90.0, 40.0)),
        FlexItem::new(2, Size::new(80.0, 40.0)),
    ]);
    let free_space = line.free_space(400.0);
    director.align_line(&mut line, JustifyContent::Center, free_space);
    let items = director
        .arrange(vec![line])
        .expect("row flows always flatten");
    for (item, x) in items.iter().zip(main_axis_positions(&items)) {
        log::info!("item {} placed at x = {x:.1}", item.box_id);
    }

    // One page revisited for a float reservation.
    let mut root = RootPass::new(PageSize::A4, Margins::all(36.0));
    root.checkpoint();
    root.advance_page();
    if root.rewind_for_floats() {
        root.reserve_float(Rect::new(36.0, 36.0, 150.0, 120.0));
        log::info!(
            "page {} keeps {:.1}pt clear beside the float",
            root.cursor().area.page_index,
            root.cursor().clear_width_at(40.0, 14.0)
        );
        root.resume_forward();
    }
    log::info!("pass resumed on page {}", root.cursor().area.page_index);
}
