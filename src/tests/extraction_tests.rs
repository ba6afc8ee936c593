#[cfg(test)]
mod tests {
    use crate::node::StaticNodeHint;
    use crate::*;
    use chrono::Utc;

    #[test]
    fn test_pack_decode_roundtrip() {
        let ticks = [2, 1_000, 9_000_000_000, (1i64 << 37) - 1];
        for layout in [Layout::IpDerived, Layout::Custom] {
            let nodes = [0, 1, layout.max_node_id() / 2, layout.max_node_id()];
            let sequences = [0, 1, layout.max_sequence()];
            for &t in &ticks {
                for &node in &nodes {
                    for &seq in &sequences {
                        for clash in [false, true] {
                            let decoded = decode(layout.pack(t, node, seq, clash)).unwrap();
                            assert_eq!(decoded.layout(), layout);
                            assert_eq!(decoded.ticks(), t);
                            assert_eq!(decoded.node_id(), node);
                            assert_eq!(decoded.sequence(), seq);
                            assert_eq!(decoded.clash(), clash);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_node_id_fidelity() {
        for node in [0u16, 5, 512, 1023] {
            let worker = IdWorker::with_custom_node(node).unwrap();
            let decoded = decode(worker.next_id().unwrap()).unwrap();
            assert!(decoded.is_custom());
            assert_eq!(decoded.node_id(), node);
            assert_eq!(decoded.node_str(), node.to_string());
        }

        let worker = IdWorker::from_provider(&StaticNodeHint(0xFF01), 100).unwrap();
        let decoded = decode(worker.next_id().unwrap()).unwrap();
        assert!(!decoded.is_custom());
        assert_eq!(decoded.node_id(), 0xFF01);
        assert_eq!(decoded.node_str(), "255.1");
    }

    #[test]
    fn test_timestamp_is_now() {
        let worker = IdWorker::with_custom_node(1).unwrap();
        let before = Utc::now();
        let decoded = decode(worker.next_id().unwrap()).unwrap();
        let after = Utc::now();

        // Truncated to 10 ms
        let ts = decoded.timestamp();
        assert!(ts <= after);
        assert!(before - ts < chrono::Duration::milliseconds(10));
        assert_eq!(ts.timestamp_subsec_millis() % 10, 0);
    }

    #[test]
    fn test_generated_ids_are_positive_and_decodable() {
        let worker = IdWorker::with_custom_node(1023).unwrap();
        for _ in 0..1000 {
            let id = worker.next_id().unwrap();
            assert!(id >= MIN_VALID_ID);
            assert!(decode(id).is_ok());
        }
    }
}
