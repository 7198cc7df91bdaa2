use seabattle::{Coord, CoordError};

#[test]
fn test_parse_valid() {
    assert_eq!("A0".parse::<Coord>(), Ok(Coord::new(0, 0)));
    assert_eq!("J9".parse::<Coord>(), Ok(Coord::new(9, 9)));
    assert_eq!(" c7\n".parse::<Coord>(), Ok(Coord::new(7, 2)));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Coord>(), Err(CoordError::InvalidFormat));
    assert_eq!("A".parse::<Coord>(), Err(CoordError::InvalidFormat));
    assert_eq!("K5".parse::<Coord>(), Err(CoordError::InvalidColumn('K')));
    assert_eq!("5A".parse::<Coord>(), Err(CoordError::InvalidColumn('5')));
    assert_eq!("Ax".parse::<Coord>(), Err(CoordError::InvalidRow));
    assert_eq!("A-1".parse::<Coord>(), Err(CoordError::InvalidRow));
    assert_eq!("A10".parse::<Coord>(), Err(CoordError::OutOfBounds(10)));
}

#[test]
fn test_display_matches_notation() {
    assert_eq!(Coord::new(5, 0).to_string(), "A5");
    assert_eq!(Coord::new(0, 9).to_string(), "J0");
    for coord in Coord::all() {
        assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
    }
}

#[test]
fn test_neighbors_are_clipped() {
    assert_eq!(Coord::new(0, 0).neighbors().count(), 3);
    assert_eq!(Coord::new(0, 5).neighbors().count(), 5);
    assert_eq!(Coord::new(5, 5).neighbors().count(), 8);
    assert!(Coord::new(5, 5).neighbors().all(|n| n != Coord::new(5, 5)));
}

#[test]
fn test_serde_as_notation() {
    let json = serde_json::to_string(&Coord::new(3, 1)).unwrap();
    assert_eq!(json, "\"B3\"");
    let back: Coord = serde_json::from_str("\"h2\"").unwrap();
    assert_eq!(back, Coord::new(2, 7));
    assert!(serde_json::from_str::<Coord>("\"Z2\"").is_err());
}
