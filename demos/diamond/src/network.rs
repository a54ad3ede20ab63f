//! The demo's in-code colony map.

use ant_core::MapPoint;
use ant_graph::{TunnelNetwork, TunnelNetworkBuilder};

/// Build the diamond colony:
///
/// ```text
///          left (1,1)
///         /          \
/// nest (0,0)          food (2,0)
///         \          /
///          right (1,-1)
/// ```
///
/// Two interior-disjoint lanes of equal length — the smallest map on which
/// ants can actually overtake each other.
pub fn build_network() -> TunnelNetwork {
    let mut b = TunnelNetworkBuilder::new();
    let nest = b.add_room("nest", MapPoint::new(0, 0));
    let left = b.add_room("left", MapPoint::new(1, 1));
    let right = b.add_room("right", MapPoint::new(1, -1));
    let food = b.add_room("food", MapPoint::new(2, 0));

    b.add_tunnel(nest, left);
    b.add_tunnel(nest, right);
    b.add_tunnel(left, food);
    b.add_tunnel(right, food);
    b.mark_start(nest);
    b.mark_end(food);

    b.build().expect("static demo map is valid")
}
