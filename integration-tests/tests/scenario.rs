use fluidbc::{BoundaryCategory, BoundaryController, Edit, Output, SubtypeCatalog};
use fluidbc_core::{DVec3, GeometryRef};
use integration_tests::{TableKernel, init_logging};

fn pipe() -> TableKernel {
    TableKernel::new()
        .with_face(
            "Pipe",
            "Face1",
            [DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0)],
            DVec3::NEG_X,
        )
        .with_face("Pipe", "Face2", [DVec3::new(5.0, 0.5, 0.0)], DVec3::X)
        .with_edge("Pipe", "Edge3", DVec3::new(0.0, 0.0, 1.0))
}

#[test]
fn wall_to_inlet_keeps_direction() {
    init_logging();
    let mut bc = BoundaryController::new(pipe());

    bc.apply(Edit::CategoryName("wall".into()));
    assert_eq!(bc.properties().subtype_domain(), ["unspecific", "fixed"]);

    bc.apply(Edit::Subtype("fixed".into()));
    assert_eq!(bc.properties().subtype(), "fixed");

    bc.apply(Edit::DirectionReference(Some(GeometryRef::new("Pipe", "Edge3"))));
    assert_eq!(bc.properties().effective_direction(), DVec3::new(0.0, 0.0, 1.0));

    bc.apply(Edit::Reversed(true));
    assert_eq!(bc.properties().effective_direction(), DVec3::new(0.0, 0.0, -1.0));

    let outcome = bc.apply(Edit::CategoryName("inlet".into()));
    assert_eq!(
        bc.properties().subtype_domain(),
        ["unspecific", "totalPressure", "uniformVelocity", "flowrate"]
    );
    assert_eq!(bc.properties().subtype(), SubtypeCatalog::DEFAULT);
    assert!(!outcome.wrote(Output::EffectiveDirection));
    assert_eq!(bc.properties().effective_direction(), DVec3::new(0.0, 0.0, -1.0));
}

#[test]
fn unknown_category_is_not_fatal() {
    init_logging();
    let mut bc = BoundaryController::new(pipe());
    bc.apply(Edit::Category(BoundaryCategory::Freestream));

    let outcome = bc.apply(Edit::CategoryName("farfield".into()));
    assert!(outcome.diagnostic.is_some());
    assert_eq!(bc.properties().category(), BoundaryCategory::Freestream);
    assert_eq!(bc.properties().subtype_domain(), ["unspecific", "freestream"]);
}

#[test]
fn faces_orient_boundary_until_reference_is_chosen() {
    init_logging();
    let mut bc = BoundaryController::new(pipe());

    bc.apply(Edit::References(vec![
        GeometryRef::new("Pipe", "Face1"),
        GeometryRef::new("Pipe", "Face2"),
    ]));
    let props = bc.properties();
    assert_eq!(props.points().len(), 3);
    assert_eq!(props.points().len(), props.normals().len());
    assert_eq!(props.normals(), [DVec3::NEG_X, DVec3::NEG_X, DVec3::X]);
    assert_eq!(props.effective_direction(), DVec3::NEG_X);

    bc.apply(Edit::DirectionReference(Some(GeometryRef::new("Pipe", "Edge3"))));
    assert_eq!(bc.properties().effective_direction(), DVec3::Z);

    // With a reference in place, new faces no longer steer the direction.
    bc.apply(Edit::References(vec![GeometryRef::new("Pipe", "Face2")]));
    assert_eq!(bc.properties().surface_normal_hint(), Some(DVec3::X));
    assert_eq!(bc.properties().effective_direction(), DVec3::Z);
}

#[test]
fn removing_all_references_keeps_markers() {
    init_logging();
    let mut bc = BoundaryController::new(pipe());
    bc.apply(Edit::References(vec![GeometryRef::new("Pipe", "Face1")]));
    let points = bc.properties().points().to_vec();

    let outcome = bc.apply(Edit::References(Vec::new()));
    assert!(outcome.is_noop());
    assert!(bc.properties().references().is_empty());
    assert_eq!(bc.properties().points(), points);
}

#[test]
fn every_edit_order_reaches_the_same_direction() {
    init_logging();
    let edits = [
        Edit::Reversed(true),
        Edit::DirectionReference(Some(GeometryRef::new("Pipe", "Face2"))),
        Edit::References(vec![GeometryRef::new("Pipe", "Face1")]),
    ];
    let orders: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let mut bc = BoundaryController::new(pipe());
        for i in order {
            bc.apply(edits[i].clone());
        }
        assert_eq!(
            bc.properties().effective_direction(),
            DVec3::NEG_X,
            "order {order:?}"
        );
    }
}
