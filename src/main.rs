fn main() {
    if let Err(e) = clinic_desk_lib::run() {
        eprintln!("clinic-desk: {e}");
        std::process::exit(1);
    }
}
