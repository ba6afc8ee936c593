//! Node identity resolution
//!
//! An IP-derived node id is the low 16 bits of the host's first private
//! IPv4 address: third octet in the high byte, fourth octet in the low byte.
//! With a /16 per cluster this keeps node ids unique across up to 65534 pods
//! without any coordination.

use std::net::{IpAddr, Ipv4Addr};

use crate::error::IdWorkerError;

/// Supplies the 16-bit node hint for the IP-derived layout
pub trait NodeHintProvider {
    fn node_hint(&self) -> Result<u16, IdWorkerError>;
}

/// Fixed hint, useful when the address is known up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticNodeHint(pub u16);

impl NodeHintProvider for StaticNodeHint {
    fn node_hint(&self) -> Result<u16, IdWorkerError> {
        Ok(self.0)
    }
}

/// Reads the node hint from the host's network interfaces
#[cfg(feature = "ip-node")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivateIpv4Provider;

#[cfg(feature = "ip-node")]
impl NodeHintProvider for PrivateIpv4Provider {
    fn node_hint(&self) -> Result<u16, IdWorkerError> {
        let addresses = pnet::datalink::interfaces()
            .into_iter()
            .filter(|iface| !iface.is_loopback())
            .flat_map(|iface| iface.ips.into_iter().map(|net| net.ip()))
            .collect::<Vec<_>>();

        let ip = first_private_ipv4(addresses).ok_or(IdWorkerError::NoPrivateAddress)?;
        tracing::debug!(%ip, "selected private address for node id");
        Ok(low16(ip))
    }
}

/// First RFC1918 IPv4 address that is not loopback
pub fn first_private_ipv4<I>(addresses: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addresses.into_iter().find_map(|addr| match addr {
        IpAddr::V4(v4) if !v4.is_loopback() && v4.is_private() => Some(v4),
        _ => None,
    })
}

/// Third and fourth octet as a 16-bit node id
#[inline]
pub fn low16(ip: Ipv4Addr) -> u16 {
    let [_, _, high, low] = ip.octets();
    u16::from_be_bytes([high, low])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_low16() {
        assert_eq!(low16(Ipv4Addr::new(172, 16, 1, 15)), 0x010F);
        assert_eq!(low16(Ipv4Addr::new(10, 0, 255, 255)), 0xFFFF);
        assert_eq!(low16(Ipv4Addr::new(192, 168, 0, 0)), 0);
    }

    #[test]
    fn test_first_private_skips_public_loopback_and_v6() {
        let addresses = vec![
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
            IpAddr::V4(Ipv4Addr::new(172, 32, 0, 1)), // just outside 172.16/12
            IpAddr::V4(Ipv4Addr::new(192, 168, 3, 7)),
            IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)),
        ];
        assert_eq!(
            first_private_ipv4(addresses),
            Some(Ipv4Addr::new(192, 168, 3, 7))
        );
    }

    #[test]
    fn test_first_private_none() {
        let addresses = vec![
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),
        ];
        assert_eq!(first_private_ipv4(addresses), None);
        assert_eq!(first_private_ipv4(Vec::new()), None);
    }

    #[test]
    fn test_static_hint() {
        assert_eq!(StaticNodeHint(0xBEEF).node_hint(), Ok(0xBEEF));
    }

    #[cfg(feature = "ip-node")]
    #[test]
    fn test_private_ipv4_provider_is_consistent() {
        // Hosts without a private address report NoPrivateAddress; either way
        // two lookups agree.
        assert_eq!(
            PrivateIpv4Provider.node_hint(),
            PrivateIpv4Provider.node_hint()
        );
    }
}
