//! Unit tests for ant-graph.
//!
//! All tests use hand-crafted networks or embedded map text so they run
//! without any fixture files on disk.

mod helpers {
    use ant_core::{MapPoint, RoomId};
    use crate::{TunnelNetwork, TunnelNetworkBuilder};

    /// Build the diamond colony used throughout the workspace tests:
    ///
    /// ```text
    ///        a (1,1)
    ///       /  \
    /// s (0,0)   e (2,0)
    ///       \  /
    ///        b (1,-1)
    /// ```
    pub fn diamond() -> (TunnelNetwork, [RoomId; 4]) {
        let mut b = TunnelNetworkBuilder::new();
        let s = b.add_room("s", MapPoint::new(0, 0));
        let a = b.add_room("a", MapPoint::new(1, 1));
        let bb = b.add_room("b", MapPoint::new(1, -1));
        let e = b.add_room("e", MapPoint::new(2, 0));
        b.add_tunnel(s, a);
        b.add_tunnel(s, bb);
        b.add_tunnel(a, e);
        b.add_tunnel(bb, e);
        b.mark_start(s);
        b.mark_end(e);
        (b.build().unwrap(), [s, a, bb, e])
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

mod builder {
    use ant_core::{MapPoint, RoomId};
    use crate::{GraphError, TunnelNetworkBuilder};

    #[test]
    fn ids_are_dense_and_sequential() {
        let mut b = TunnelNetworkBuilder::new();
        assert_eq!(b.add_room("one", MapPoint::new(0, 0)), RoomId(0));
        assert_eq!(b.add_room("two", MapPoint::new(1, 0)), RoomId(1));
        assert_eq!(b.add_room("three", MapPoint::new(2, 0)), RoomId(2));
    }

    #[test]
    fn tunnels_are_bidirectional() {
        let (net, [s, a, bb, e]) = super::helpers::diamond();
        assert_eq!(net.tunnel_count(), 8); // 4 tunnels × 2 directions

        let s_neighbors: Vec<_> = net.neighbors(s).collect();
        assert_eq!(s_neighbors, vec![a, bb]);

        // Reverse direction exists too.
        assert!(net.neighbors(a).any(|r| r == s));
        assert!(net.neighbors(e).any(|r| r == bb));
    }

    #[test]
    fn neighbor_order_is_declaration_order() {
        let mut b = TunnelNetworkBuilder::new();
        let s = b.add_room("s", MapPoint::new(0, 0));
        let x = b.add_room("x", MapPoint::new(1, 0));
        let y = b.add_room("y", MapPoint::new(1, 1));
        let e = b.add_room("e", MapPoint::new(2, 0));
        // Declare s-y before s-x; the neighbor slice must keep that order.
        b.add_tunnel(s, y);
        b.add_tunnel(s, x);
        b.add_tunnel(x, e);
        b.add_tunnel(y, e);
        b.mark_start(s);
        b.mark_end(e);
        let net = b.build().unwrap();
        assert_eq!(net.neighbors(s).collect::<Vec<_>>(), vec![y, x]);
    }

    #[test]
    fn unknown_room_has_no_neighbors() {
        let (net, _) = super::helpers::diamond();
        assert_eq!(net.neighbors(RoomId(99)).count(), 0);
        assert_eq!(net.out_degree(RoomId::INVALID), 0);
    }

    #[test]
    fn name_lookup() {
        let (net, [s, _, _, e]) = super::helpers::diamond();
        assert_eq!(net.room_by_name("s"), Some(s));
        assert_eq!(net.room_by_name("e"), Some(e));
        assert_eq!(net.room_by_name("nowhere"), None);
        assert_eq!(net.room_name(s), "s");
    }

    #[test]
    fn duplicate_tunnels_are_kept() {
        let mut b = TunnelNetworkBuilder::new();
        let s = b.add_room("s", MapPoint::new(0, 0));
        let e = b.add_room("e", MapPoint::new(1, 0));
        b.add_tunnel(s, e);
        b.add_tunnel(s, e);
        b.mark_start(s);
        b.mark_end(e);
        let net = b.build().unwrap();
        // Adjacency is a list: the redundant tunnel shows up twice.
        assert_eq!(net.out_degree(s), 2);
        assert_eq!(net.neighbors(s).collect::<Vec<_>>(), vec![e, e]);
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = TunnelNetworkBuilder::new();
        let s = b.add_room("s", MapPoint::new(0, 0));
        let e = b.add_room("e", MapPoint::new(1, 0));
        b.add_tunnel(s, s);
        b.add_tunnel(s, e);
        b.mark_start(s);
        b.mark_end(e);
        assert_eq!(b.build().unwrap_err(), GraphError::SelfLoop("s".into()));
    }

    #[test]
    fn start_end_invariants() {
        let mut b = TunnelNetworkBuilder::new();
        let s = b.add_room("s", MapPoint::new(0, 0));
        b.add_room("e", MapPoint::new(1, 0));
        assert_eq!(b.build().unwrap_err(), GraphError::MissingStart);

        let mut b = TunnelNetworkBuilder::new();
        let s2 = b.add_room("s", MapPoint::new(0, 0));
        b.mark_start(s2);
        assert_eq!(b.build().unwrap_err(), GraphError::MissingEnd);

        let mut b = TunnelNetworkBuilder::new();
        let only = b.add_room("s", MapPoint::new(0, 0));
        b.mark_start(only);
        b.mark_end(only);
        assert_eq!(b.build().unwrap_err(), GraphError::StartIsEnd);
        let _ = s;
    }

    #[test]
    fn duplicate_room_name_rejected() {
        let mut b = TunnelNetworkBuilder::new();
        let s = b.add_room("twin", MapPoint::new(0, 0));
        let e = b.add_room("twin", MapPoint::new(1, 0));
        b.mark_start(s);
        b.mark_end(e);
        assert_eq!(
            b.build().unwrap_err(),
            GraphError::DuplicateRoomName("twin".into())
        );
    }
}

// ── Colony-map loader ─────────────────────────────────────────────────────────

mod loader {
    use std::io::Cursor;

    use crate::{load_colony_reader, GraphError, MapError};

    fn load(text: &str) -> Result<crate::Colony, MapError> {
        load_colony_reader(Cursor::new(text))
    }

    #[test]
    fn minimal_map() {
        let colony = load(
            "3\n\
             ##start\n\
             hall 0 0\n\
             nest 1 1\n\
             ##end\n\
             food 2 0\n\
             hall-nest\n\
             nest-food\n",
        )
        .unwrap();

        assert_eq!(colony.ant_count, 3);
        let net = &colony.network;
        assert_eq!(net.room_count(), 3);
        assert_eq!(net.tunnel_count(), 4);
        assert_eq!(net.room_name(net.start), "hall");
        assert_eq!(net.room_name(net.end), "food");
        assert_eq!(net.room_pos(net.end).x, 2);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let colony = load(
            "1\n\
             # the colony\n\
             \n\
             ##start\n\
             s 0 0\n\
             # halfway note\n\
             ##end\n\
             e 1 0\n\
             s-e\n",
        )
        .unwrap();
        assert_eq!(colony.network.room_count(), 2);
    }

    #[test]
    fn ant_count_must_be_positive() {
        for bad in ["0", "-4", "ants", ""] {
            let text = format!("{bad}\n##start\ns 0 0\n##end\ne 1 0\ns-e\n");
            assert!(matches!(
                load(&text).unwrap_err(),
                MapError::InvalidAntCount { line: 1 }
            ));
        }
    }

    #[test]
    fn tunnel_to_unknown_room() {
        let err = load("1\n##start\ns 0 0\n##end\ne 1 0\ns-ghost\n").unwrap_err();
        match err {
            MapError::UnknownRoom { name, line } => {
                assert_eq!(name, "ghost");
                assert_eq!(line, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directive_must_precede_a_room() {
        let err = load("1\n##start\ns-e\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::DanglingDirective { directive: "##start", line: 3 }
        ));

        // Directive at EOF.
        let err = load("1\n##start\ns 0 0\n##end\n").unwrap_err();
        assert!(matches!(err, MapError::DanglingDirective { directive: "##end", .. }));
    }

    #[test]
    fn malformed_lines() {
        let err = load("2\n##start\ns 0 zero\n##end\ne 1 0\ns-e\n").unwrap_err();
        assert!(matches!(err, MapError::MalformedRoom { line: 3 }));

        let err = load("2\n##start\ns 0 0\n##end\ne 1 0\ns-e-x\n").unwrap_err();
        assert!(matches!(err, MapError::MalformedTunnel { line: 6 }));

        let err = load("2\n##start\ns 0 0\n##end\ne 1 0\ns e\n").unwrap_err();
        assert!(matches!(err, MapError::UnrecognizedLine { line: 6 }));
    }

    #[test]
    fn graph_validation_propagates() {
        // Missing ##end marker surfaces as the builder's error.
        let err = load("1\n##start\ns 0 0\ne 1 0\ns-e\n").unwrap_err();
        assert!(matches!(err, MapError::Graph(GraphError::MissingEnd)));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            load("").unwrap_err(),
            MapError::InvalidAntCount { line: 1 }
        ));
    }
}
