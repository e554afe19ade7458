//! SSD1306 OLED panel as the switched display.

use display_interface::DisplayError;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use pirscreen::DisplayPower;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the panel, draw the status screen and leave it switched off
/// until the controller's first directive.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init()?;
    draw_status(&mut display)?;
    display.set_display_on(false)?;
    Ok(display)
}

fn draw_status<I2C>(display: &mut Display<I2C>) -> Result<(), DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    let style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();

    display.clear_buffer();
    let _ = Text::new("pirscreen", Point::new(0, 10), style).draw(display);
    let _ = Text::new("Motion detected", Point::new(0, 30), style).draw(display);
    display.flush()
}

/// Actuator that sends the SSD1306 display-on/off command. Panel RAM is
/// kept while off, so the status screen reappears on the next "on".
pub struct OledPower<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledPower<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>) -> Self {
        Self { display }
    }
}

impl<I2C> DisplayPower for OledPower<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = DisplayError;

    fn set_power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.display.set_display_on(on)
    }
}
