//! Bit layouts for packed ids
//!
//! Both layouts share the same frame, most significant bit first:
//!
//! ```text
//! +------+--------------+----------+---------+-------+--------+
//! | sign |  tick delta  | sequence | node id | clash | custom |
//! +------+--------------+----------+---------+-------+--------+
//! |  1   |      37      |  8 / 14  | 16 / 10 |   1   |   1    |
//! +------+--------------+----------+---------+-------+--------+
//! ```
//!
//! `IpDerived` spends 16 bits on the node (the two low octets of a private
//! IPv4 address) and keeps 8 bits of sequence, i.e. 25 600 ids per second.
//! `Custom` takes a 10-bit node id and 14 bits of sequence, i.e. 1 638 400
//! ids per second.

/// Width of the tick-delta field
pub const TIMESTAMP_BITS: u32 = 37;

/// Shift of the tick-delta field
pub const TIMESTAMP_SHIFT: u32 = 26;

/// Mask for the tick-delta field (before shifting)
pub const TIMESTAMP_MASK: i64 = (1 << TIMESTAMP_BITS) - 1;

const NODE_SHIFT: u32 = 2;
const CLASH_BIT: i64 = 0b10;
const CUSTOM_BIT: i64 = 0b01;

/// Field width assignment, selected once per worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 16-bit node taken from a private IPv4 address, 8-bit sequence
    IpDerived,
    /// Caller assigned 10-bit node, 14-bit sequence
    Custom,
}

impl Layout {
    #[inline(always)]
    pub const fn node_bits(self) -> u32 {
        match self {
            Layout::IpDerived => 16,
            Layout::Custom => 10,
        }
    }

    #[inline(always)]
    pub const fn sequence_bits(self) -> u32 {
        match self {
            Layout::IpDerived => 8,
            Layout::Custom => 14,
        }
    }

    /// Largest legal node id (65535 or 1023)
    #[inline(always)]
    pub const fn max_node_id(self) -> u16 {
        ((1u32 << self.node_bits()) - 1) as u16
    }

    /// Sequence ceiling within one tick (255 or 16383)
    #[inline(always)]
    pub const fn max_sequence(self) -> u16 {
        ((1u32 << self.sequence_bits()) - 1) as u16
    }

    #[inline(always)]
    pub const fn is_custom(self) -> bool {
        matches!(self, Layout::Custom)
    }

    #[inline(always)]
    const fn sequence_shift(self) -> u32 {
        NODE_SHIFT + self.node_bits()
    }

    /// Layout encoded in the lowest bit of a packed id
    #[inline(always)]
    pub const fn of(id: i64) -> Self {
        if id & CUSTOM_BIT == CUSTOM_BIT {
            Layout::Custom
        } else {
            Layout::IpDerived
        }
    }

    /// Pack fields into an id. Each field is masked to its width.
    #[inline]
    pub const fn pack(self, delta: i64, node_id: u16, sequence: u16, clash: bool) -> i64 {
        let node = (node_id as i64) & (self.max_node_id() as i64);
        let seq = (sequence as i64) & (self.max_sequence() as i64);
        let mut id = ((delta & TIMESTAMP_MASK) << TIMESTAMP_SHIFT)
            | (seq << self.sequence_shift())
            | (node << NODE_SHIFT);
        if clash {
            id |= CLASH_BIT;
        }
        if self.is_custom() {
            id |= CUSTOM_BIT;
        }
        id
    }

    /// Split an id into `(delta, node_id, sequence, clash)` using this layout
    #[inline]
    pub const fn unpack(self, id: i64) -> (i64, u16, u16, bool) {
        let delta = (id >> TIMESTAMP_SHIFT) & TIMESTAMP_MASK;
        let sequence = ((id >> self.sequence_shift()) & self.max_sequence() as i64) as u16;
        let node_id = ((id >> NODE_SHIFT) & self.max_node_id() as i64) as u16;
        (delta, node_id, sequence, id & CLASH_BIT == CLASH_BIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_fill_64_bits() {
        for layout in [Layout::IpDerived, Layout::Custom] {
            assert_eq!(
                1 + TIMESTAMP_BITS + layout.sequence_bits() + layout.node_bits() + 1 + 1,
                64
            );
        }
    }

    #[test]
    fn test_ceilings() {
        assert_eq!(Layout::IpDerived.max_node_id(), 65535);
        assert_eq!(Layout::IpDerived.max_sequence(), 255);
        assert_eq!(Layout::Custom.max_node_id(), 1023);
        assert_eq!(Layout::Custom.max_sequence(), 16383);
    }

    #[test]
    fn test_ip_bit_positions() {
        // ip 172.16.1.15 -> node 0x010F
        let id = Layout::IpDerived.pack(3, 0x010F, 7, true);
        assert_eq!(id, 3 << 26 | 7 << 18 | 0x010F << 2 | 0b10);
        assert_eq!(Layout::of(id), Layout::IpDerived);
    }

    #[test]
    fn test_custom_bit_positions() {
        let id = Layout::Custom.pack(3, 5, 9, false);
        assert_eq!(id, 3 << 26 | 9 << 12 | 5 << 2 | 0b1);
        assert_eq!(Layout::of(id), Layout::Custom);
    }

    #[test]
    fn test_sign_bit_never_set() {
        for layout in [Layout::IpDerived, Layout::Custom] {
            let id = layout.pack(
                TIMESTAMP_MASK,
                layout.max_node_id(),
                layout.max_sequence(),
                true,
            );
            assert!(id > 0);
            assert_eq!(
                layout.unpack(id),
                (TIMESTAMP_MASK, layout.max_node_id(), layout.max_sequence(), true)
            );
        }
    }

    #[test]
    fn test_fields_are_masked() {
        // A node that overflows 10 bits must not bleed into the sequence field
        let id = Layout::Custom.pack(1, 0x7FF, 0, false);
        let (_, node, seq, _) = Layout::Custom.unpack(id);
        assert_eq!(node, 0x3FF);
        assert_eq!(seq, 0);
    }
}
