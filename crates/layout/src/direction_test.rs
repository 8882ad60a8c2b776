use crate::flex::direction::{director_for, ColumnDirector, MainAxisDirector, RowDirector, RowReverseDirector};
use crate::flex::{main_axis_positions, FlexItem, FlexLine};
use folio_style::flex::{FlexDirection, JustifyContent};
use folio_types::geometry::Size;

fn line_of(widths: &[f32]) -> FlexLine {
    FlexLine::new(
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| FlexItem::new(i, Size::new(*w, 10.0)))
            .collect(),
    )
}

fn shifts(line: &FlexLine) -> Vec<f32> {
    line.items.iter().map(|item| item.main_shift).collect()
}

#[test]
fn forward_center_shifts_only_the_first_item() {
    let mut line = line_of(&[20.0, 30.0]);
    RowDirector.align_line(&mut line, JustifyContent::Center, 50.0);
    assert_eq!(shifts(&line), vec![25.0, 0.0]);
}

#[test]
fn reverse_center_shifts_only_the_last_item() {
    let mut line = line_of(&[20.0, 30.0, 10.0]);
    RowReverseDirector.align_line(&mut line, JustifyContent::Center, 40.0);
    assert_eq!(shifts(&line), vec![0.0, 0.0, 20.0]);
}

#[test]
fn start_class_policies_shift_nothing() {
    for justify in [
        JustifyContent::Normal,
        JustifyContent::Start,
        JustifyContent::SelfStart,
        JustifyContent::FlexStart,
        JustifyContent::Left,
        JustifyContent::Stretch,
    ] {
        let mut forward = line_of(&[20.0, 30.0]);
        RowDirector.align_line(&mut forward, justify, 50.0);
        assert_eq!(shifts(&forward), vec![0.0, 0.0], "forward {justify:?}");

        let mut reverse = line_of(&[20.0, 30.0]);
        RowReverseDirector.align_line(&mut reverse, justify, 50.0);
        assert_eq!(shifts(&reverse), vec![0.0, 0.0], "reverse {justify:?}");
    }
}

#[test]
fn forward_end_class_policies_shift_the_whole_run() {
    for justify in [
        JustifyContent::End,
        JustifyContent::SelfEnd,
        JustifyContent::FlexEnd,
        JustifyContent::Right,
    ] {
        let mut line = line_of(&[20.0, 30.0]);
        RowDirector.align_line(&mut line, justify, 50.0);
        assert_eq!(shifts(&line), vec![50.0, 0.0], "{justify:?}");

        let positions = main_axis_positions(&line.items);
        assert_eq!(positions, vec![50.0, 70.0], "{justify:?}");
    }
}

#[test]
fn reverse_end_class_excludes_its_own_start_synonym() {
    for justify in [
        JustifyContent::End,
        JustifyContent::SelfEnd,
        JustifyContent::Right,
    ] {
        let mut line = line_of(&[20.0, 30.0]);
        RowReverseDirector.align_line(&mut line, justify, 50.0);
        assert_eq!(shifts(&line), vec![0.0, 50.0], "{justify:?}");
    }

    // flex-end names the reversed flow's start edge and moves nothing.
    let mut line = line_of(&[20.0, 30.0]);
    RowReverseDirector.align_line(&mut line, JustifyContent::FlexEnd, 50.0);
    assert_eq!(shifts(&line), vec![0.0, 0.0]);
}

#[test]
fn aligning_an_empty_line_is_a_no_op() {
    let mut line = FlexLine::default();
    RowDirector.align_line(&mut line, JustifyContent::End, 50.0);
    RowReverseDirector.align_line(&mut line, JustifyContent::Center, 50.0);
    assert!(line.items.is_empty());
}

#[test]
fn reverse_ordering_is_an_involution() {
    let original = line_of(&[10.0, 20.0, 30.0, 40.0]);
    let mut line = original.clone();

    RowReverseDirector.order_line(&mut line);
    assert_ne!(line, original);
    RowReverseDirector.order_line(&mut line);
    assert_eq!(line, original);
}

#[test]
fn forward_arrange_preserves_document_order() {
    let lines = vec![line_of(&[10.0, 20.0]), line_of(&[30.0])];
    let flat = RowDirector.arrange(lines).unwrap();
    let ids: Vec<usize> = flat.iter().map(|item| item.box_id).collect();
    assert_eq!(ids, vec![0, 1, 0]);
}

#[test]
fn reverse_arrange_reverses_within_lines_only() {
    let mut first = line_of(&[10.0, 20.0]);
    first.items[0].box_id = 1;
    first.items[1].box_id = 2;
    let mut second = line_of(&[30.0, 40.0]);
    second.items[0].box_id = 3;
    second.items[1].box_id = 4;

    let flat = RowReverseDirector.arrange(vec![first, second]).unwrap();
    let ids: Vec<usize> = flat.iter().map(|item| item.box_id).collect();
    assert_eq!(ids, vec![2, 1, 4, 3]);
}

#[test]
fn reverse_alignment_travels_with_its_item_through_arrange() {
    // Align on document order first, then flatten: the shifted document-last
    // item is placed first, so the run starts at the shift.
    let mut line = line_of(&[20.0, 30.0]);
    RowReverseDirector.align_line(&mut line, JustifyContent::End, 50.0);
    let flat = RowReverseDirector.arrange(vec![line]).unwrap();

    let positions = main_axis_positions(&flat);
    assert_eq!(positions, vec![50.0, 80.0]);
}

#[test]
fn column_arrange_is_unsupported_not_empty() {
    assert!(ColumnDirector.arrange(vec![line_of(&[10.0])]).is_none());
    assert!(ColumnDirector.arrange(Vec::new()).is_none());

    // An empty forward container flattens to an empty order instead.
    assert_eq!(RowDirector.arrange(Vec::new()), Some(Vec::new()));
}

#[test]
fn column_alignment_matches_the_forward_rule() {
    let mut line = line_of(&[20.0, 30.0]);
    ColumnDirector.align_line(&mut line, JustifyContent::Center, 30.0);
    assert_eq!(shifts(&line), vec![15.0, 0.0]);
}

#[test]
fn directors_are_selected_from_the_declared_flow() {
    let lines = vec![line_of(&[10.0, 20.0])];

    let forward = director_for(FlexDirection::Row).arrange(lines.clone()).unwrap();
    assert_eq!(forward[0].box_id, 0);

    let reversed = director_for(FlexDirection::RowReverse)
        .arrange(lines.clone())
        .unwrap();
    assert_eq!(reversed[0].box_id, 1);

    assert!(director_for(FlexDirection::Column).arrange(lines.clone()).is_none());
    assert!(director_for(FlexDirection::ColumnReverse).arrange(lines).is_none());
}
