fn main() {
    let perf = web_sys::window().and_then(|w| w.performance());
    let t0 = perf.as_ref().map(|p| p.now());

    user_admin_frontend::start();

    if let (Some(p), Some(start)) = (perf.as_ref(), t0) {
        log::debug!("App mounted ({:.1} ms)", p.now() - start);
    }
}
