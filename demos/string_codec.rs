use flakeid::{decode_base62, decode_base82, encode_base62, encode_base82, IdWorker};

fn main() {
    let worker = IdWorker::with_custom_node(3).unwrap();

    for _ in 0..3 {
        let id = worker.next_id().unwrap();
        let s62 = encode_base62(id).unwrap();
        let s82 = encode_base82(id).unwrap();
        println!("{id:>20} base62={s62:<12} base82={s82}");
        assert_eq!(decode_base62(&s62).unwrap(), id);
        assert_eq!(decode_base82(&s82).unwrap(), id);
    }

    let max = encode_base62(i64::MAX).unwrap();
    println!("\ni64::MAX in base62: {max}");

    let s = worker.next_id_base62().unwrap();
    println!("Decoded {s}: {}", worker.decode_base62(&s).unwrap());
}
