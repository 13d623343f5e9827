use nalgebra::vector;
use spatial::{Camera, Matrix, PlayerAtFrame, Point, SpaceMismatch, World, Xform};

fn main() -> Result<(), SpaceMismatch> {
    let world_to_camera = Xform::new(
        Matrix::new_translation(&vector![0.0, -1.5, -4.0]),
        World,
        Camera,
    );
    let camera_to_player = Xform::<Camera, PlayerAtFrame>::from_spaces(Camera, PlayerAtFrame::new(3));

    let world_to_player = world_to_camera.then(camera_to_player)?;

    let origin = Point::new(vector![0.0, 0.0, 0.0], World);
    let in_player = world_to_player.apply_to_point(&origin)?;
    println!("world origin seen by the player: {in_player:?}");

    // Same frame type, different frame number: recoverable at runtime.
    let stale = Xform::<PlayerAtFrame, World>::from_spaces(PlayerAtFrame::new(2), World);
    match world_to_player.then(stale) {
        Ok(_) => println!("composed across frames"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
