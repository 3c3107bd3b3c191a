fn main() {
    bevy_shmup::game::run();
}
