use ilmatar::{
    error::Error,
    globe::{
        fleet::{fleet, fleet_states},
        projection::{
            camera_position, default_camera, facing_rotation, marker_position, GeoCoordinate,
        },
    },
    vars::CAMERA_DISTANCE,
};
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("initialising ilmatar");

    let helsinki = GeoCoordinate::new(60.17, 24.94);
    let marker = marker_position(helsinki)?;
    let camera = camera_position(helsinki, CAMERA_DISTANCE)?;
    info!(
        "marker at ({:.3}, {:.3}, {:.3})",
        marker.x, marker.y, marker.z
    );
    info!(
        "camera at ({:.3}, {:.3}, {:.3}), facing yaw {:.3}",
        camera.x,
        camera.y,
        camera.z,
        facing_rotation(helsinki)
    );

    let satellites = fleet();
    for frame in 0..4 {
        let elapsed = frame as f64 * 0.5;
        let states = fleet_states(&satellites, elapsed);
        let lead = states[0].position;
        info!(
            "frame {}: lead weather bird at ({:.3}, {:.3}, {:.3})",
            frame, lead.x, lead.y, lead.z
        );
    }

    let resting = default_camera();
    info!(
        "resting viewpoint at ({:.1}, {:.1}, {:.1})",
        resting.x, resting.y, resting.z
    );
    info!("simulation completed");
    Ok(())
}
