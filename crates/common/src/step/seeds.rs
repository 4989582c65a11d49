//! Hard-coded bootstrap peers.
//!
//! A node that has never been online learns its first peers from a table of
//! `(address, port)` pairs compiled into the binary. Each entry is turned into
//! a [`PeerAddress`] with a `last_seen` time between one and two weeks in the
//! past, so that any address learned later from a live peer ranks ahead of it.

use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};

use bitcoin::p2p::ServiceFlags;
use chrono::Utc;
use rand::Rng;

const ONE_WEEK: i64 = 7 * 24 * 60 * 60;
const TWO_WEEKS: i64 = 2 * ONE_WEEK;

/// A raw seed table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSpec {
    /// IPv6 address, network byte order. IPv4 peers use the v4-mapped form.
    pub addr: [u8; 16],
    /// TCP port.
    pub port: u16,
}

impl SeedSpec {
    /// A seed entry for an IPv4 address.
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let [a, b, c, d] = octets;
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }
}

/// Main network bootstrap peers.
pub const MAIN_SEEDS: &[SeedSpec] = &[];

/// Test network bootstrap peers.
pub const TEST_SEEDS: &[SeedSpec] = &[];

/// A peer address as handed to the address manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeerAddress {
    /// Peer socket address.
    pub address: SocketAddrV6,
    /// Services the peer is assumed to offer.
    pub services: ServiceFlags,
    /// Unix timestamp the peer was last seen at.
    pub last_seen: i64,
}

impl PeerAddress {
    /// The socket address, with v4-mapped addresses unwrapped to IPv4.
    pub fn socket_addr(&self) -> SocketAddr {
        match self.address.ip().to_ipv4_mapped() {
            Some(ip) => SocketAddr::new(ip.into(), self.address.port()),
            None => SocketAddr::V6(self.address),
        }
    }
}

/// Converts a seed table into peer addresses.
///
/// The output has the same length and order as `table`. Every `last_seen` is
/// drawn uniformly from `[now - 2 weeks, now - 1 week)`.
pub fn convert_seeds<R: Rng + ?Sized>(
    table: &[SeedSpec],
    now: i64,
    rng: &mut R,
) -> Vec<PeerAddress> {
    let oldest = now.saturating_sub(TWO_WEEKS);
    table
        .iter()
        .map(|seed| PeerAddress {
            address: SocketAddrV6::new(Ipv6Addr::from(seed.addr), seed.port, 0, 0),
            services: ServiceFlags::NETWORK,
            last_seen: oldest.saturating_add(rng.gen_range(0..ONE_WEEK)),
        })
        .collect()
}

/// [`convert_seeds`] against the wall clock and the thread-local RNG.
pub fn fixed_seeds(table: &[SeedSpec]) -> Vec<PeerAddress> {
    convert_seeds(table, Utc::now().timestamp(), &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn table() -> Vec<SeedSpec> {
        vec![
            SeedSpec::ipv4([10, 0, 0, 1], 17777),
            SeedSpec {
                addr: Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1).octets(),
                port: 17777,
            },
            SeedSpec::ipv4([192, 168, 1, 20], 18777),
        ]
    }

    #[test]
    fn test_last_seen_window() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            for peer in convert_seeds(&table(), NOW, &mut rng) {
                assert!(peer.last_seen >= NOW - 2 * ONE_WEEK);
                assert!(peer.last_seen < NOW - ONE_WEEK);
            }
        }
    }

    #[test]
    fn test_order_and_length_preserved() {
        let mut rng = StdRng::seed_from_u64(1);
        let peers = convert_seeds(&table(), NOW, &mut rng);
        assert_eq!(peers.len(), 3);
        assert_eq!(
            peers[0].socket_addr(),
            SocketAddr::new(Ipv4Addr::new(10, 0, 0, 1).into(), 17777)
        );
        assert_eq!(peers[1].address.ip(), &Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
        assert_eq!(peers[2].address.port(), 18777);
        assert!(peers.iter().all(|p| p.services == ServiceFlags::NETWORK));
    }

    #[test]
    fn test_empty_table() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(convert_seeds(&[], NOW, &mut rng).is_empty());
        assert!(fixed_seeds(&[]).is_empty());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = convert_seeds(&table(), NOW, &mut StdRng::seed_from_u64(42));
        let b = convert_seeds(&table(), NOW, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_seeds_uses_wall_clock() {
        let before = Utc::now().timestamp();
        let peers = fixed_seeds(&table());
        let after = Utc::now().timestamp();
        for peer in peers {
            assert!(peer.last_seen >= before - 2 * ONE_WEEK);
            assert!(peer.last_seen < after - ONE_WEEK);
        }
    }
}
