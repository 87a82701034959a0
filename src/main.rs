use rotor_controller::{
    AnalogRotor, Axis, Command, ProtocolDecoder, RotorConfig, RotorController, SimulatedIo,
    TelemetryEncoder, Transport, DEFAULT_CONTROL_PORT,
};
use std::error::Error;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use strum::IntoEnumIterator;

enum LoopEvent {
    Byte(io::Result<u8>),
    RotorTick,
    TelemetryTick,
    Shutdown,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let port = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_CONTROL_PORT,
    };
    let config = RotorConfig::default();

    let mut transport =
        Transport::bind(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)).await?;
    let mut decoder = ProtocolDecoder::new(config);
    let mut controller = RotorController::new(AnalogRotor::new(SimulatedIo::new()), config);

    let mut rotor_tick = tokio::time::interval(config.update_interval);
    let mut telemetry_tick = tokio::time::interval(config.telemetry_interval);

    loop {
        let event = tokio::select! {
            byte = transport.next_byte() => LoopEvent::Byte(byte),
            _ = rotor_tick.tick() => LoopEvent::RotorTick,
            _ = telemetry_tick.tick() => LoopEvent::TelemetryTick,
            _ = tokio::signal::ctrl_c() => LoopEvent::Shutdown,
        };

        match event {
            LoopEvent::Byte(byte) => {
                if let Some(command) = decoder.feed(byte?) {
                    let Command::MoveTo { azimuth, elevation } = command;
                    println!(
                        "New target: AZ {:.1} EL {:.1}",
                        azimuth as f64 / 100.0,
                        elevation as f64 / 100.0
                    );
                    controller.accept_command(command);
                }
            }
            LoopEvent::RotorTick => controller.rotate(),
            LoopEvent::TelemetryTick => {
                let payload = TelemetryEncoder::produce(controller.state());
                transport.send_telemetry(&payload.to_bytes()).await;
            }
            LoopEvent::Shutdown => break,
        }
    }

    println!("Shutting down, stopping rotor");
    controller.all_stop();
    let state = *controller.state();
    for axis in Axis::iter() {
        let position = match axis {
            Axis::Azimuth => state.current_azimuth,
            Axis::Elevation => state.current_elevation,
        };
        println!("{} final position: {:.1} degrees", axis, position as f64 / 100.0);
    }

    Ok(())
}
