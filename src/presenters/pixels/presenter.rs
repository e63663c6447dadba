use crate::adapters::pixel_format::{SurfaceSizeMismatch, copy_rgb_to_rgba};
use crate::core::actions::draw_frame::draw_frame;
use crate::core::animation::FrameDescription;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::window::Window;

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
    #[error(transparent)]
    Surface(#[from] SurfaceSizeMismatch),
}

/// Rasterises frames in software and shows them through a `pixels` surface,
/// with the egui overlay composited on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    raster: PixelBuffer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, PresenterError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            raster: PixelBuffer::new(width, height)?,
            width,
            height,
        })
    }

    /// Callers must skip zero-sized (minimised) windows.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PresenterError> {
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.raster = PixelBuffer::new(width, height)?;
        self.width = width;
        self.height = height;

        Ok(())
    }

    pub fn draw(&mut self, frame: &FrameDescription) -> Result<(), PresenterError> {
        draw_frame(frame, &mut self.raster, Colour::BLACK);
        copy_rgb_to_rgba(&self.raster, self.pixels.frame_mut())?;

        Ok(())
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), PresenterError> {
        let (width, height) = (self.width, self.height);
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [width, height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the curve underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}
