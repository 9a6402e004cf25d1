use mockall::mock;
use shpipe_core::common::data::Lanes;
use shpipe_core::soc::traits::DataBus;

mock! {
    pub Bus {}
    impl DataBus for Bus {
        fn fetch(&mut self, addr: u32) -> Option<u16>;
        fn read(&mut self, addr: u32, lanes: Lanes) -> u32;
        fn write(&mut self, addr: u32, lanes: Lanes, data: u32);
    }
}

/// A mock whose program bus serves `program` from address 0 and NOPs elsewhere.
pub fn with_program(program: &'static [u16]) -> MockBus {
    let mut bus = MockBus::new();
    let _ = bus.expect_fetch().returning(move |addr| {
        let slot = (addr / 4) as usize;
        Some(program.get(slot).copied().unwrap_or(0x0009))
    });
    bus
}
