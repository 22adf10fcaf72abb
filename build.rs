use vergen::EmitBuilder;

fn main() {
    // Falls back to a fixed tag when the crate is built outside a git checkout
    if EmitBuilder::builder().all_git().emit().is_err() {
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
    }
}
