use fortress_foreman::*;

#[test]
fn clearing_after_a_layout_empties_the_whole_grid() {
    let mut dispatcher = LayoutDispatcher::new(LayoutConfig::default()).unwrap();

    for kind in LayoutKind::ALL {
        let _ = dispatcher.dispatch(kind).unwrap();
        assert!(dispatcher.grid().painted_count() > 0);

        dispatcher.clear();
        assert!(
            dispatcher.grid().iter().all(|(_, style)| style.is_none()),
            "every tile should be empty after clearing the {} layout",
            kind
        );
    }
}

#[test]
fn switching_layouts_leaves_no_residue() {
    let config = LayoutConfig::default();

    let mut fresh = GridSurface::new(config.grid_width, config.grid_height).unwrap();
    let _ = render_layout(LayoutKind::Ring, &config, &mut fresh).unwrap();

    let mut dispatcher = LayoutDispatcher::new(config).unwrap();
    let _ = dispatcher.dispatch(LayoutKind::Corner).unwrap();
    let _ = dispatcher.dispatch(LayoutKind::Ring).unwrap();

    assert_eq!(dispatcher.grid(), &fresh);
}

#[test]
fn dispatched_grid_matches_the_plan_painted_in_order() {
    let mut dispatcher = LayoutDispatcher::new(LayoutConfig::default()).unwrap();
    let plan = dispatcher.dispatch(LayoutKind::Corner).unwrap();

    // The last structure covering a tile decides its style.
    for (loc, style) in dispatcher.grid().iter() {
        let expected = plan
            .structures
            .iter()
            .rev()
            .find(|s| s.rect.contains(loc.col() as i32, loc.row() as i32))
            .map(|s| s.style);
        assert_eq!(style, expected, "tile {:?}", loc);
    }
}

#[test]
fn corner_bases_off_the_right_edge_are_clipped() {
    let mut dispatcher = LayoutDispatcher::new(LayoutConfig::default()).unwrap();
    let plan = dispatcher.dispatch(LayoutKind::Corner).unwrap();

    // Alliance 4's furnace is at column 92, so its bases start at column 98.
    let fourth = AllianceId::new(3).unwrap();
    assert!(plan
        .owned_by(fourth)
        .any(|s| s.kind == StructureKind::Base && s.rect.x >= 100));
    assert_eq!(dispatcher.grid().get(98, 5), Some(Style::Alliance(fourth)));
    assert_eq!(dispatcher.grid().get(100, 5), None);
}

#[test]
fn svg_renderer_receives_every_structure() {
    let config = LayoutConfig::default();
    let mut svg = SvgRenderer::new(config.grid_width, config.grid_height, config.cell_size_px);

    let plan = render_layout(LayoutKind::Ring, &config, &mut svg).unwrap();

    assert_eq!(svg.len(), plan.structures.len());
    let doc = svg.to_svg();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains("<title>CT</title>"));
    assert!(doc.contains(r#"class="alliance8-base""#));
}

#[test]
fn ascii_render_uses_one_line_per_row() {
    let config = LayoutConfig::default().with_grid_size(40, 20);
    let mut dispatcher = LayoutDispatcher::new(config).unwrap();
    let _ = dispatcher.dispatch(LayoutKind::Ring).unwrap();

    let text = render_ascii(dispatcher.grid());
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|line| line.chars().count() == 40));
    assert_eq!(lines[10].chars().nth(20), Some('#'));
}
