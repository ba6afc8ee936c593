use flakeid::{decode, IdWorker, IdWorkerError};

fn main() -> Result<(), IdWorkerError> {
    // Node id from the low 16 bits of this host's private IPv4 address
    let worker = match IdWorker::from_private_ip() {
        Ok(worker) => worker,
        Err(IdWorkerError::NoPrivateAddress) => {
            println!("No private IPv4 address found, falling back to custom node 1");
            IdWorker::with_custom_node(1)?
        }
        Err(err) => return Err(err),
    };

    println!("Generated IDs:");
    for _ in 0..3 {
        let id = worker.next_id()?;
        println!("  {id} -> {}", decode(id)?);
    }

    Ok(())
}
