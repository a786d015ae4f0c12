use getbench::error::AppResult;

fn main() -> AppResult<()> {
    getbench::run()
}
