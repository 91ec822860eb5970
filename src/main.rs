fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    mandelbrot_explorer::mandelbrot_controller()?;

    Ok(())
}
