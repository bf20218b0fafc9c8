//! Example walking through a typical scene setup: resolve a placement
//! constraint, sample an array center, orient the array and locate a source
//! relative to it.

use ndarray::array;
use scene_sim_spatial::{
    convert_placement_to_range, sample_within_range, ArrayGeometry, AxisPlacement, Orientation,
    PlacementSpec, RoomDimensions,
};

fn main() {
    println!("Scene setup example");
    println!("===================");

    // A 6 x 5 x 3 m room with a tabletop array kept half a meter off the walls
    let room = RoomDimensions::new(6.0, 5.0, 3.0).expect("valid room");
    let placement = PlacementSpec::default()
        .with_height(AxisPlacement::Range(0.7, 1.2))
        .with_min_to_wall(0.5);
    let array_radius = 0.05;

    let range =
        convert_placement_to_range(&placement, &room, array_radius).expect("valid placement");
    println!("\nSampling ranges per axis:");
    for (axis, row) in ["x", "y", "height"].iter().zip(range.rows()) {
        println!("  {axis}: [{:.2}, {:.2}] m", row[0], row[1]);
    }

    let mut rng = rand::rng();
    let center = sample_within_range(&range, &mut rng);
    println!("\nSampled array center: {center:.3}");

    // Four-mic linear array, 5 cm pitch, moved to the sampled center
    let positions = array![
        [0.00, 0.0, 0.0],
        [0.05, 0.0, 0.0],
        [0.10, 0.0, 0.0],
        [0.15, 0.0, 0.0],
    ];
    let mut mic_array = ArrayGeometry::new(positions).expect("valid positions");
    mic_array.translate(&center);
    println!("Array radius: {:.3} m", mic_array.radius());

    // Turn the array 45 degrees to the left
    let orientation = Orientation::with_yaw(45.0).expect("valid orientation");
    let rotated = mic_array.new_rotated_array(&orientation);

    // Where does a talker standing near the corner appear from the array?
    let talker = array![1.0, 1.0, 1.7];
    let (distance, azimuth, elevation) = rotated.spherical_relative_to_array(&talker);
    println!("\nTalker at {talker:.2}:");
    println!("  distance:  {distance:.2} m");
    println!("  azimuth:   {azimuth:.1} deg");
    println!("  elevation: {elevation:.1} deg");
}
