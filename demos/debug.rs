fn main() {
    let message = ogn_aprs::parse(
        r"ICA4D21C2>OGADSB,qAS,HLST:/001140h4741.90N/01104.20E^124/460/A=034868 !W91! id254D21C2 +128fpm FL350.00 A3:AXY547M Sq2244",
    );

    println!("{:#?}", message);
}
