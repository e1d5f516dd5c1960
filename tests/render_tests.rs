// Host-side tests for surface error recovery.

use pillars_core::SurfaceRecovery;

#[test]
fn out_of_memory_stops_the_frame_loop() {
    assert_eq!(
        SurfaceRecovery::for_error(&wgpu::SurfaceError::OutOfMemory),
        SurfaceRecovery::Stop
    );
}

#[test]
fn lost_or_outdated_surface_is_reconfigured() {
    for err in [wgpu::SurfaceError::Lost, wgpu::SurfaceError::Outdated] {
        assert_eq!(
            SurfaceRecovery::for_error(&err),
            SurfaceRecovery::Reconfigure,
            "{err}"
        );
    }
}

#[test]
fn timeout_only_drops_the_frame() {
    assert_eq!(
        SurfaceRecovery::for_error(&wgpu::SurfaceError::Timeout),
        SurfaceRecovery::Skip
    );
}
