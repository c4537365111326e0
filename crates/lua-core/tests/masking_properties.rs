use lua_core::{build_bus_route, build_gate_type, build_io_config, build_reset, GateType, IoPort};

// Every builder must agree with the same call made on the masked address;
// the hardware decoders only look at the low 2 bits of column and row.
#[test]
fn every_builder_ignores_high_address_bits() {
    for col in 0..=u8::MAX {
        for row in [0u8, 1, 2, 3, 4, 7, 128, 255] {
            let (mc, mr) = (col & 3, row & 3);
            assert_eq!(build_reset(col, row), build_reset(mc, mr));
            assert_eq!(
                build_gate_type(col, row, GateType::And),
                build_gate_type(mc, mr, GateType::And)
            );
            assert_eq!(
                build_io_config(col, row, IoPort::D, false),
                build_io_config(mc, mr, IoPort::D, false)
            );
            assert_eq!(
                build_bus_route(col, row, IoPort::C, true),
                build_bus_route(mc, mr, IoPort::C, true)
            );
        }
    }
}

// No builder may ever touch the two reserved bits.
#[test]
fn builders_never_set_reserved_bits() {
    for col in 0..8u8 {
        for row in 0..8u8 {
            for port in IoPort::ALL {
                for flag in [false, true] {
                    assert!(!build_io_config(col, row, port, flag).has_reserved_bits());
                    assert!(!build_bus_route(col, row, port, flag).has_reserved_bits());
                }
            }
            for gate in GateType::ALL {
                assert!(!build_gate_type(col, row, gate).has_reserved_bits());
            }
            assert!(!build_reset(col, row).has_reserved_bits());
        }
    }
}
