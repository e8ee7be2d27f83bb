fn main() {
    bomber_game::game::run();
}
